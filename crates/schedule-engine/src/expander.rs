//! Slot expansion: one availability string → half-hour start times.
//!
//! Two shapes are understood, tried in order:
//!
//! 1. A bare time (`"14:00"`, `"9:00"`) is returned verbatim as a single slot.
//! 2. A range anywhere in the text (`"Lunes 09:00 - 12:00"`) expands to every
//!    30-minute start in `[start, end)`, zero-padded.
//!
//! Anything else expands to nothing. Schedule strings are curated free text,
//! so an unreadable entry contributes no slots rather than failing the caller.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::labels::SLOT_MINUTES;

static BARE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("bare time pattern is valid"));

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}):([0-9]{2})\s*-\s*([0-9]{2}):([0-9]{2})")
        .expect("time range pattern is valid")
});

/// Expand a raw availability string into slot start times.
///
/// Surrounding whitespace is ignored. Inverted or empty ranges and
/// unrecognized text yield an empty vector.
///
/// # Examples
///
/// ```
/// use schedule_engine::expand_slots;
///
/// assert_eq!(expand_slots("09:00 - 10:30"), vec!["09:00", "09:30", "10:00"]);
/// assert_eq!(expand_slots("9:00"), vec!["9:00"]);
/// assert!(expand_slots("12:00 - 09:00").is_empty());
/// ```
pub fn expand_slots(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();

    if let Some(slot) = try_bare_time(trimmed) {
        trace!("bare time '{slot}'");
        return vec![slot];
    }

    if let Some(slots) = try_range(trimmed) {
        trace!("range in '{trimmed}' gave {} slot(s)", slots.len());
        return slots;
    }

    debug!("no time pattern in '{trimmed}', contributing no slots");
    Vec::new()
}

/// Convert an hour/minute pair to minutes since midnight.
pub fn minutes_since_midnight(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// Render minutes since midnight as zero-padded `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn try_bare_time(s: &str) -> Option<String> {
    BARE_TIME.is_match(s).then(|| s.to_string())
}

fn try_range(s: &str) -> Option<Vec<String>> {
    let caps = TIME_RANGE.captures(s)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let start = minutes_since_midnight(field(1)?, field(2)?);
    let end = minutes_since_midnight(field(3)?, field(4)?);

    Some(
        (start..end)
            .step_by(SLOT_MINUTES as usize)
            .map(format_minutes)
            .collect(),
    )
}
