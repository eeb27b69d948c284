use crate::core::types::DayOfWeek;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub trait WeekdayExt {
    fn to_day_of_week(self) -> DayOfWeek;
}

impl WeekdayExt for Weekday {
    fn to_day_of_week(self) -> DayOfWeek {
        match self {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

pub trait NaiveDateExt: Sized {
    fn first_of_month(self) -> NaiveDate;
    fn days_in_month(self) -> u32;
    /// Moves by whole months keeping the day-of-month; a day the target month
    /// does not have rolls forward into the month after it (Jan 31 + 1 -> Mar 2/3).
    fn shift_months_rolling(self, months: i32) -> NaiveDate;
}

impl NaiveDateExt for NaiveDate {
    fn first_of_month(self) -> NaiveDate {
        self.with_day(1).unwrap_or(self)
    }

    fn days_in_month(self) -> u32 {
        let first = self.first_of_month();
        first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    fn shift_months_rolling(self, months: i32) -> NaiveDate {
        let total = self.year() * 12 + self.month0() as i32 + months;
        let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.day() - 1))))
            .unwrap_or(self)
    }
}
