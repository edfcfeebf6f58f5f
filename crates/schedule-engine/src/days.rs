//! Spanish weekday names and the two lookup tables built from them.
//!
//! [`WEEKDAYS`] is Monday-first and feeds day pickers. [`WEEKDAYS_FROM_SUNDAY`]
//! is Sunday-first and maps a zero-based day-of-week index (0 = Sunday, as
//! chrono's `num_days_from_sunday` produces) to a name. The two tables are
//! kept as separate literals.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Day names in picker order, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Day names indexed by days-from-Sunday.
pub const WEEKDAYS_FROM_SUNDAY: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Matches one of the seven names at the very start of an entry, any casing.
static DAY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(lunes|martes|miércoles|jueves|viernes|sábado|domingo)")
        .expect("day prefix pattern is valid")
});

/// A canonical weekday. Ordering follows [`WEEKDAYS`] (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekdayName {
    Lunes,
    Martes,
    #[serde(rename = "Miércoles")]
    Miercoles,
    Jueves,
    Viernes,
    #[serde(rename = "Sábado")]
    Sabado,
    Domingo,
}

impl WeekdayName {
    /// All days, Monday first.
    pub const ALL: [WeekdayName; 7] = [
        WeekdayName::Lunes,
        WeekdayName::Martes,
        WeekdayName::Miercoles,
        WeekdayName::Jueves,
        WeekdayName::Viernes,
        WeekdayName::Sabado,
        WeekdayName::Domingo,
    ];

    /// The canonical capitalized name, diacritics included.
    pub fn as_str(self) -> &'static str {
        WEEKDAYS[self.num_days_from_monday()]
    }

    pub fn num_days_from_monday(self) -> usize {
        self as usize
    }

    /// Look up a day by its days-from-Sunday index (0 = Domingo).
    pub fn from_sunday_index(index: usize) -> Result<Self> {
        let name = weekday_name_for_index(index).ok_or(ScheduleError::DayIndexOutOfRange(index))?;
        name.parse()
    }
}

impl Display for WeekdayName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayName {
    type Err = ScheduleError;

    /// Exact canonical spelling only. Use [`match_day_prefix`] for lenient matching.
    fn from_str(s: &str) -> Result<Self> {
        WEEKDAYS
            .iter()
            .position(|name| *name == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ScheduleError::UnknownWeekday(s.to_string()))
    }
}

impl From<Weekday> for WeekdayName {
    fn from(day: Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

/// Name for a zero-based day-of-week index where 0 is Sunday.
pub fn weekday_name_for_index(index: usize) -> Option<&'static str> {
    WEEKDAYS_FROM_SUNDAY.get(index).copied()
}

/// Name of the weekday `date` falls on.
pub fn weekday_name_for_date(date: NaiveDate) -> &'static str {
    WEEKDAYS_FROM_SUNDAY[date.weekday().num_days_from_sunday() as usize]
}

/// Uppercase the first character and lowercase the rest.
///
/// Works on chars, so accented vowels are recased like any other letter.
pub fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recognize a weekday name at the very start of `item`, ignoring case.
///
/// Returns the canonical day and whatever follows the matched name. Only the
/// name itself is consumed; separators stay in the remainder. Leading
/// whitespace or a misspelled name yields `None`.
pub fn match_day_prefix(item: &str) -> Option<(WeekdayName, &str)> {
    let m = DAY_PREFIX.find(item)?;
    let day = title_case(m.as_str()).parse().ok()?;
    Some((day, &item[m.end()..]))
}
