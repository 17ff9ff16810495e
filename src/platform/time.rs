//! Frame timing

/// Frames kept in the FPS window
pub const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second over the last `FPS_WINDOW` scheduler timestamps
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
    frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
            frames: 0,
        }
    }
}

impl FrameStats {
    /// Record a frame timestamp (milliseconds) and return the current FPS
    pub fn record(&mut self, time: f64) -> u32 {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;

        // Oldest entry is the one we'll overwrite next; zero until the window fills
        let oldest_time = self.frame_times[self.frame_index];
        if self.frames >= FPS_WINDOW as u64 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames recorded since start
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
