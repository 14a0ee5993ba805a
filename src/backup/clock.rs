//! Timestamps for backup names.

use chrono::{DateTime, Local, NaiveDateTime};

/// Format used in backup names: date, dash, time, no other separators.
pub const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Source of the backup timestamp.
pub trait Clock {
    /// Current time formatted with [`STAMP_FORMAT`].
    fn stamp(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn stamp(&self) -> String {
        format_stamp(&Local::now())
    }
}

/// A clock frozen at one instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn stamp(&self) -> String {
        self.0.format(STAMP_FORMAT).to_string()
    }
}

/// Format a timestamp for a backup name.
pub fn format_stamp(at: &DateTime<Local>) -> String {
    at.format(STAMP_FORMAT).to_string()
}
