// Web front-end tuning constants.

// Element looked up when the host mounts by id without naming one.
pub const DEFAULT_CANVAS_ID: &str = "ambient-canvas";

// rAF timestamps are milliseconds
pub const MS_PER_SEC: f64 = 1000.0;

// Frame statistics window (seconds) for the debug fps log line
pub const STATS_LOG_INTERVAL_SEC: f64 = 5.0;

// Frames needed in a window before a rate is reported
pub const STATS_MIN_FRAMES: u32 = 2;
