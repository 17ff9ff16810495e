//! Multiball Pong - five balls, two paddles, one screen
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (balls, paddles, collisions, key state)
//! - `renderer`: Immediate-mode drawing surface and the WebGPU backend
//! - `platform`: Frame loop cancellation and timing
//! - `settings`: Non-gameplay preferences
//! - `error`: Startup failures

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;
pub use sim::Game;

/// Game configuration constants
pub mod consts {
    /// Field size used when the canvas reports none (and natively)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Distance from the field edge to the paddle's outer side
    pub const PADDLE_INSET: f32 = 40.0;
    /// Pixels per frame
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Decorative guide lines, measured from each side
    pub const GUIDE_LINE_OFFSET: f32 = 120.0;
    pub const GUIDE_LINE_WIDTH: f32 = 3.0;

    /// Triangles per ball when tessellating circles
    pub const CIRCLE_SEGMENTS: u32 = 32;
}

/// Solid colors, as CSS sRGB values
pub mod colors {
    pub type Rgba = [f32; 4];

    pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];
    /// `#333`
    pub const FIELD: Rgba = [0.2, 0.2, 0.2, 1.0];
    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const ORANGE: Rgba = [1.0, 0.647, 0.0, 1.0];
    pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
    pub const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];
    pub const GRAY: Rgba = [0.502, 0.502, 0.502, 1.0];
    pub const LIME_GREEN: Rgba = [0.196, 0.804, 0.196, 1.0];
    pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
}
