//! Application-level configuration constants.

// Ticking
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Duration input field
pub const DURATION_STEP: f64 = 0.1;
pub const DURATION_MIN: f64 = 0.0;

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
