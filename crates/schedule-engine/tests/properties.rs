//! Property tests for slot expansion and grouping.

use proptest::prelude::*;
use schedule_engine::{
    expand_slots, format_minutes, group_schedule, strip_day_prefix, time_labels, WEEKDAYS,
};

/// A weekday name in canonical, lower or upper case.
fn day_token() -> impl Strategy<Value = String> {
    (prop::sample::select(WEEKDAYS.to_vec()), 0..3u8).prop_map(|(name, casing)| match casing {
        0 => name.to_string(),
        1 => name.to_lowercase(),
        _ => name.to_uppercase(),
    })
}

/// A schedule item: optional day, then a range, a bare time or filler text.
fn schedule_item() -> impl Strategy<Value = String> {
    let body = prop_oneof![
        (0..48usize, 0..48usize)
            .prop_map(|(s, e)| format!(" {} - {}", time_labels()[s], time_labels()[e])),
        (0..48usize).prop_map(|i| format!(" {}", time_labels()[i])),
        "[a-z ]{0,12}",
    ];
    (prop::option::of(day_token()), body)
        .prop_map(|(day, body)| format!("{}{body}", day.unwrap_or_default()))
}

proptest! {
    #[test]
    fn grouping_preserves_slot_count(items in prop::collection::vec(schedule_item(), 0..20)) {
        let grouped = group_schedule(&items);
        let expected: usize = items
            .iter()
            .map(|item| expand_slots(strip_day_prefix(item)).len())
            .sum();
        prop_assert_eq!(grouped.total_slots(), expected);
    }

    #[test]
    fn found_days_are_distinct_and_keyed(items in prop::collection::vec(schedule_item(), 0..20)) {
        let grouped = group_schedule(&items);
        let mut seen = grouped.found_days.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), grouped.found_days.len());
        prop_assert_eq!(grouped.days.len(), grouped.found_days.len());
        for day in &grouped.found_days {
            prop_assert!(grouped.days.contains_key(day));
        }
    }

    #[test]
    fn aligned_range_yields_contiguous_labels(s in 0..48usize, e in 0..48usize) {
        let labels = time_labels();
        let slots = expand_slots(&format!("{} - {}", labels[s], labels[e]));
        if s < e {
            prop_assert_eq!(slots.len(), e - s);
            prop_assert_eq!(slots.as_slice(), &labels[s..e]);
        } else {
            prop_assert!(slots.is_empty());
        }
    }

    #[test]
    fn bare_time_passes_through(hour in 0..24u32, minute in 0..60u32, pad in any::<bool>()) {
        let raw = if pad {
            format!("{hour:02}:{minute:02}")
        } else {
            format!("{hour}:{minute:02}")
        };
        prop_assert_eq!(expand_slots(&raw), vec![raw.clone()]);
    }

    #[test]
    fn format_minutes_is_zero_padded(minutes in 0..(24 * 60u32)) {
        let formatted = format_minutes(minutes);
        prop_assert_eq!(formatted.len(), 5);
        prop_assert_eq!(&formatted[2..3], ":");
    }
}

#[test]
fn labels_step_by_thirty_minutes() {
    let labels = time_labels();
    assert_eq!(labels.len(), 48);
    assert_eq!(labels.first().map(String::as_str), Some("00:00"));
    assert_eq!(labels.last().map(String::as_str), Some("23:30"));
    for (i, label) in labels.iter().enumerate() {
        assert_eq!(*label, format_minutes(i as u32 * 30));
    }
}
