//! Building availability strings from a picked day and time range.
//!
//! Profile editors store availability as `"<Day> <start> - <end>"` strings.
//! [`AvailabilityEntry`] is the validated form of one such pick; its
//! [`Display`] output is what gets stored and later fed to the expander.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::days::WeekdayName;
use crate::error::{Result, ScheduleError};
use crate::labels::is_time_label;

/// One day plus a half-open `[start, end)` range of picker labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityEntry {
    pub day: WeekdayName,
    pub start: String,
    pub end: String,
}

impl AvailabilityEntry {
    /// Validate a picked range.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTimeLabel`] if either time is not one
    /// of the 48 picker labels, or [`ScheduleError::InvertedRange`] if
    /// `start` is not strictly before `end`.
    pub fn new(day: WeekdayName, start: &str, end: &str) -> Result<Self> {
        for label in [start, end] {
            if !is_time_label(label) {
                return Err(ScheduleError::InvalidTimeLabel(label.to_string()));
            }
        }
        // Zero-padded labels order lexically the same as chronologically.
        if start >= end {
            return Err(ScheduleError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            day,
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// The stored string form.
    pub fn to_raw(&self) -> String {
        self.to_string()
    }
}

impl Display for AvailabilityEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} - {}", self.day, self.start, self.end)
    }
}
