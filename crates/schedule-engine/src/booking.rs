//! Selectable options for the advisory booking form.
//!
//! The form lists each stored availability string as-is. Slots are attached
//! alongside so a caller can offer finer choices without re-parsing.

use serde::Serialize;

use crate::expander::expand_slots;

/// One stored availability string and the slots it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingOption {
    /// The stored string, verbatim.
    pub label: String,
    pub slots: Vec<String>,
}

/// One option per stored string, in stored order.
///
/// Strings with no readable times are kept with an empty `slots`.
pub fn booking_options<S: AsRef<str>>(stored: &[S]) -> Vec<BookingOption> {
    stored
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            BookingOption {
                label: raw.to_string(),
                slots: expand_slots(raw),
            }
        })
        .collect()
}
