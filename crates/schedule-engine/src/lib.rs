//! # schedule-engine
//!
//! The availability-schedule text model behind programmer profiles and
//! advisory bookings.
//!
//! Availability is stored as free-text strings such as
//! `"Lunes 09:00 - 12:00"` or a bare `"14:00"`. This crate turns them into
//! half-hour slot start times, optionally bucketed by weekday. All functions
//! are pure and never fail on bad input; unreadable strings contribute no
//! slots.
//!
//! ## Modules
//!
//! - [`days`] — Spanish weekday names, Monday-first and Sunday-first tables
//! - [`labels`] — The 48 half-hour labels for time pickers
//! - [`expander`] — One availability string → slot start times
//! - [`grouper`] — Many availability strings → per-day buckets plus generics
//! - [`entry`] — Validated `"<Day> <start> - <end>"` entries
//! - [`booking`] — Booking-form options built from stored strings
//! - [`error`] — Error types

pub mod booking;
pub mod days;
pub mod entry;
pub mod error;
pub mod expander;
pub mod grouper;
pub mod labels;

pub use booking::{booking_options, BookingOption};
pub use days::{
    match_day_prefix, title_case, weekday_name_for_date, weekday_name_for_index, WeekdayName,
    WEEKDAYS, WEEKDAYS_FROM_SUNDAY,
};
pub use entry::AvailabilityEntry;
pub use error::ScheduleError;
pub use expander::{expand_slots, format_minutes, minutes_since_midnight};
pub use grouper::{group_schedule, strip_day_prefix, GroupedSchedule};
pub use labels::{is_time_label, time_label, time_labels, SLOTS_PER_DAY, SLOT_MINUTES};
