//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - One `update()` per animation frame, velocities in pixels per frame
//! - No randomness; the opening layout is fixed
//! - Stable iteration order (ball creation order)

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{deflect, paddle_contact};
pub use input::{KEY_DOWN, KEY_UP, KeyState};
pub use state::{Ball, Control, Direction, Field, Game, Paddle, Side};
