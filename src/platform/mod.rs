//! Platform abstraction layer
//!
//! Host-independent pieces of the frame loop:
//! - Cancellation of the self-rescheduling loop
//! - Frame timing / FPS
//! - A bounded headless loop for native runs

pub mod frame_loop;
pub mod time;

pub use frame_loop::{CancelToken, FrameLoop, run_headless};
pub use time::FrameStats;
