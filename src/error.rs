//! Startup errors
//!
//! Gameplay never fails; only binding to the page and the GPU can.

/// Errors raised while wiring the game to the host page and GPU.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// No element with the configured id exists.
    #[error("canvas element '{id}' not found")]
    CanvasNotFound { id: String },

    /// The element exists but is not a `<canvas>`.
    #[error("element '{id}' is not a canvas")]
    NotACanvas { id: String },

    /// `wgpu` could not create a surface for the canvas.
    #[error("surface creation failed: {0}")]
    Surface(String),

    /// No adapter is compatible with the surface.
    #[error("no compatible GPU adapter: {0}")]
    Adapter(String),

    /// The adapter refused to create a device.
    #[error("device request failed: {0}")]
    Device(String),

    /// Logger was already initialised or could not start.
    #[error("logger init failed: {0}")]
    Logger(String),
}
