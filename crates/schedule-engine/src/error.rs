//! Error types for schedule-engine operations.
//!
//! Only the strict entry points return these. Slot expansion and schedule
//! grouping absorb bad input into empty results instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Unknown weekday: '{0}'")]
    UnknownWeekday(String),

    #[error("Invalid time label: '{0}' (expected a half-hour label from 00:00 to 23:30)")]
    InvalidTimeLabel(String),

    #[error("Inverted range: start {start} is not before end {end}")]
    InvertedRange { start: String, end: String },

    #[error("Day index out of range: {0} (expected 0-6)")]
    DayIndexOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
