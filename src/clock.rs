use crate::constants::MS_PER_SEC;

/// Converts `requestAnimationFrame` timestamps into seconds since the first
/// frame. Resizes never touch it, so elapsed time survives them.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    last_sec: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed seconds for `timestamp_ms`. Never runs backwards, and a
    /// non-finite timestamp repeats the previous value.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return self.last_sec;
        }
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let sec = ((timestamp_ms - origin) / MS_PER_SEC).max(self.last_sec);
        self.last_sec = sec;
        sec
    }

    pub fn elapsed(&self) -> f64 {
        self.last_sec
    }
}
