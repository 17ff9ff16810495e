//! Cancellable frame loop
//!
//! The browser drives `FrameLoop::step` from `requestAnimationFrame` and
//! only reschedules while the token is live. Natively `run_headless` runs
//! the same step in a plain bounded loop.

use std::cell::Cell;
use std::rc::Rc;

use super::time::FrameStats;
use crate::renderer::DrawList;
use crate::sim::Game;

/// Shared stop flag for the frame loop. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Per-frame driver: update, then repaint into a reused draw list
#[derive(Debug, Default)]
pub struct FrameLoop {
    token: CancelToken,
    stats: FrameStats,
    list: DrawList,
}

impl FrameLoop {
    pub fn new(token: CancelToken) -> Self {
        Self {
            token,
            stats: FrameStats::default(),
            list: DrawList::new(),
        }
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run one frame at scheduler time `time` (ms).
    ///
    /// Returns the painted frame, or `None` once cancelled, in which case
    /// nothing is updated and the caller must not reschedule.
    pub fn step(&mut self, game: &mut Game, time: f64) -> Option<&DrawList> {
        if self.token.is_cancelled() {
            return None;
        }

        game.update();
        self.list.reset();
        game.draw(&mut self.list);

        let fps = self.stats.record(time);
        log::trace!("frame {} ({} fps)", self.stats.frames(), fps);

        Some(&self.list)
    }
}

/// Drive `game` for at most `frames` frames at a nominal 60 Hz.
///
/// Stops early when `token` is cancelled. Returns the number of frames run.
pub fn run_headless(game: &mut Game, frames: u64, token: CancelToken) -> u64 {
    let mut frame_loop = FrameLoop::new(token);
    let mut ran = 0;

    while ran < frames {
        let time = ran as f64 * 1000.0 / 60.0;
        if frame_loop.step(game, time).is_none() {
            log::info!("Frame loop cancelled after {} frames", ran);
            break;
        }
        ran += 1;
    }

    ran
}
