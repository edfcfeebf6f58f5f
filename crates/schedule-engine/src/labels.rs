//! The half-hour time labels offered by start/end pickers.

use std::sync::LazyLock;

/// Length of one bookable slot, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of half-hour labels in a day.
pub const SLOTS_PER_DAY: usize = 48;

static TIME_LABELS: LazyLock<Vec<String>> = LazyLock::new(|| {
    (0..SLOTS_PER_DAY)
        .map(|i| {
            let minute = if i % 2 == 0 { "00" } else { "30" };
            format!("{:02}:{minute}", i / 2)
        })
        .collect()
});

/// All 48 labels for one day, `"00:00"` through `"23:30"`.
pub fn time_labels() -> &'static [String] {
    &TIME_LABELS
}

/// The label at `index`, or `None` past `"23:30"`.
pub fn time_label(index: usize) -> Option<&'static str> {
    TIME_LABELS.get(index).map(String::as_str)
}

/// Whether `label` is one of the picker labels (exact, zero-padded).
pub fn is_time_label(label: &str) -> bool {
    TIME_LABELS.iter().any(|l| l == label)
}
