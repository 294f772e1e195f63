use crate::constants::{STATS_LOG_INTERVAL_SEC, STATS_MIN_FRAMES};
use instant::Instant;

/// Rolling frame counter; reports the average rate once per window.
pub struct FrameStats {
    window_start: Option<Instant>,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window_start: None,
            frames: 0,
        }
    }

    /// Count a frame at `now`. Returns frames-per-second when a window of
    /// `STATS_LOG_INTERVAL_SEC` has closed.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 0;
            return None;
        };
        self.frames += 1;
        let elapsed = now.duration_since(start).as_secs_f64();
        if elapsed < STATS_LOG_INTERVAL_SEC {
            return None;
        }
        let report = (self.frames >= STATS_MIN_FRAMES).then(|| self.frames as f64 / elapsed);
        self.window_start = Some(now);
        self.frames = 0;
        report
    }
}
