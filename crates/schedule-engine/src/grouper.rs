//! Bucketing a list of availability strings by weekday.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::days::{match_day_prefix, WeekdayName};
use crate::expander::expand_slots;

/// Slots from a list of availability strings, split by weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSchedule {
    /// Slots per day, in input order. Only days that appeared in the input
    /// have a key. Tokens are neither sorted nor deduplicated.
    pub days: BTreeMap<WeekdayName, Vec<String>>,
    /// Slots from entries without a recognizable day prefix.
    pub generics: Vec<String>,
    /// Distinct days seen, in order of first appearance.
    pub found_days: Vec<WeekdayName>,
}

impl GroupedSchedule {
    /// Slots recorded for `day`; empty if the day never appeared.
    pub fn slots_for(&self, day: WeekdayName) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slot count across every day bucket plus the generic bucket.
    pub fn total_slots(&self) -> usize {
        self.days.values().map(Vec::len).sum::<usize>() + self.generics.len()
    }

    fn push(&mut self, item: &str) {
        match match_day_prefix(item) {
            Some((day, rest)) => {
                if !self.found_days.contains(&day) {
                    self.found_days.push(day);
                }
                let slots = expand_slots(rest);
                if slots.is_empty() {
                    debug!("entry '{item}' names {day} but has no readable times");
                }
                self.days.entry(day).or_default().extend(slots);
            }
            None => self.generics.extend(expand_slots(item)),
        }
    }
}

/// Group raw availability strings by their leading weekday.
///
/// Each item whose first characters spell a weekday (any casing) has that day
/// stripped and the remainder expanded into the day's bucket. Other items are
/// expanded whole into [`GroupedSchedule::generics`]. Never fails: unreadable
/// items contribute no slots.
///
/// # Examples
///
/// ```
/// use schedule_engine::{group_schedule, WeekdayName};
///
/// let grouped = group_schedule(&["MIÉRCOLES 08:00 - 09:00", "14:00"]);
/// assert_eq!(grouped.slots_for(WeekdayName::Miercoles), ["08:00", "08:30"]);
/// assert_eq!(grouped.generics, vec!["14:00"]);
/// ```
pub fn group_schedule<S: AsRef<str>>(items: &[S]) -> GroupedSchedule {
    let mut grouped = GroupedSchedule::default();
    for item in items {
        grouped.push(item.as_ref());
    }
    grouped
}

/// The part of `item` that gets expanded: everything after a leading day
/// name, or the whole item when it has none.
pub fn strip_day_prefix(item: &str) -> &str {
    match_day_prefix(item).map_or(item, |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key_is_canonical() {
        let grouped = group_schedule(&["MIÉRCOLES 08:00 - 09:00"]);
        let keys: Vec<&str> = grouped.days.keys().map(|d| d.as_str()).collect();
        assert_eq!(keys, vec!["Miércoles"]);
        assert_eq!(grouped.slots_for(WeekdayName::Miercoles), ["08:00", "08:30"]);
    }

    #[test]
    fn test_same_day_accumulates() {
        let grouped = group_schedule(&["Lunes 09:00 - 10:00", "Lunes 10:00 - 10:30"]);
        assert_eq!(
            grouped.slots_for(WeekdayName::Lunes),
            ["09:00", "09:30", "10:00"]
        );
        assert_eq!(grouped.found_days, vec![WeekdayName::Lunes]);
    }

    #[test]
    fn test_duplicates_kept() {
        let grouped = group_schedule(&["Martes 09:00 - 09:30", "martes 09:00 - 09:30"]);
        assert_eq!(grouped.slots_for(WeekdayName::Martes), ["09:00", "09:00"]);
    }

    #[test]
    fn test_misspelled_day_goes_to_generics() {
        let grouped = group_schedule(&["Lnes 09:00 - 10:00"]);
        assert!(grouped.days.is_empty());
        assert!(grouped.found_days.is_empty());
        assert_eq!(grouped.generics, vec!["09:00", "09:30"]);
    }

    #[test]
    fn test_found_days_first_appearance_order() {
        let grouped = group_schedule(&[
            "Viernes 10:00 - 10:30",
            "Lunes 09:00 - 09:30",
            "viernes 11:00 - 11:30",
        ]);
        assert_eq!(
            grouped.found_days,
            vec![WeekdayName::Viernes, WeekdayName::Lunes]
        );
    }

    #[test]
    fn test_day_without_times_still_keyed() {
        let grouped = group_schedule(&["Domingo"]);
        assert_eq!(grouped.found_days, vec![WeekdayName::Domingo]);
        assert!(grouped.days.contains_key(&WeekdayName::Domingo));
        assert!(grouped.slots_for(WeekdayName::Domingo).is_empty());
    }

    #[test]
    fn test_bare_time_after_day() {
        let grouped = group_schedule(&["Jueves 15:00"]);
        assert_eq!(grouped.slots_for(WeekdayName::Jueves), ["15:00"]);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_schedule::<&str>(&[]);
        assert_eq!(grouped, GroupedSchedule::default());
        assert_eq!(grouped.total_slots(), 0);
    }

    #[test]
    fn test_total_slots() {
        let grouped = group_schedule(&["Lunes 09:00 - 10:00", "14:00", "basura"]);
        assert_eq!(grouped.total_slots(), 3);
    }

    #[test]
    fn test_strip_day_prefix() {
        assert_eq!(strip_day_prefix("Sábado 10:00 - 11:00"), " 10:00 - 11:00");
        assert_eq!(strip_day_prefix("Lnes 10:00"), "Lnes 10:00");
    }

    #[test]
    fn test_serialized_shape() {
        let grouped = group_schedule(&["Sábado 10:00 - 11:00", "14:00"]);
        let json = serde_json::to_value(&grouped).unwrap();
        assert_eq!(json["days"]["Sábado"], serde_json::json!(["10:00", "10:30"]));
        assert_eq!(json["generics"], serde_json::json!(["14:00"]));
        assert_eq!(json["found_days"], serde_json::json!(["Sábado"]));
    }
}
