use crate::core::types::Date;
use chrono::{Local, NaiveDate};
use std::fmt;

/// Signed day count between today and a target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DDay {
    /// Target is this many days ahead (`D-n`).
    Ahead(i64),
    Today,
    /// Target passed this many days ago (`D+n`).
    Past(i64),
    /// Target could not be read as a date.
    Invalid,
}

impl DDay {
    pub const INVALID_LABEL: &'static str = "Invalid Date";

    pub fn from_diff(diff: i64) -> Self {
        match diff {
            d if d > 0 => DDay::Ahead(d),
            0 => DDay::Today,
            d => DDay::Past(d.abs()),
        }
    }

    /// Both sides are plain calendar days, so the difference is already whole.
    pub fn between(today: NaiveDate, target: NaiveDate) -> Self {
        Self::from_diff(target.signed_duration_since(today).num_days())
    }

    pub fn until(end_date: &str, today: NaiveDate) -> Self {
        match Date::try_from_str(end_date) {
            Ok(target) => Self::between(today, target.0),
            Err(_) => DDay::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, DDay::Invalid)
    }
}

impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DDay::Ahead(n) => write!(f, "D-{n}"),
            DDay::Today => f.write_str("D-Day"),
            DDay::Past(n) => write!(f, "D+{n}"),
            DDay::Invalid => f.write_str(Self::INVALID_LABEL),
        }
    }
}

/// Label for `end_date` relative to `today`.
pub fn d_day(end_date: &str, today: NaiveDate) -> DDay {
    DDay::until(end_date, today)
}

/// Same as [`d_day`] against the local date at the moment of the call.
pub fn d_day_today(end_date: &str) -> DDay {
    DDay::until(end_date, Local::now().date_naive())
}
