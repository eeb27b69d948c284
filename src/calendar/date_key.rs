use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Canonical `YYYY-MM-DD` identity of a calendar day.
///
/// Keys built from a parsed date and from a month-grid cell compare equal
/// whenever they name the same day; the month index is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateKey(String);

impl DateKey {
    /// Total for any integers; callers are expected to pass real calendar values.
    pub fn from_parts(year: i32, month_index: i32, day: i32) -> Self {
        DateKey(format!(
            "{}-{:02}-{:02}",
            year,
            i64::from(month_index) + 1,
            day
        ))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_parts(date.year(), date.month0() as i32, date.day() as i32)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
