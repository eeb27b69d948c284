use crate::calendar::date_index::{DayAggregate, DayIndex};
use crate::calendar::date_key::DateKey;
use crate::core::types::{DayOfWeek, WeekStart};
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Datelike, NaiveDate};
use std::iter;

/// A day-of-month, or `None` for padding.
pub type MonthCell = Option<u32>;
pub type Week = [MonthCell; 7];

/// Week rows of one month, padded so every row has 7 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month0: u32,
    days_in_month: u32,
    week_start: WeekStart,
    weeks: Vec<Week>,
}

/// A real day of the grid joined with what the index knows about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub key: DateKey,
    pub weekday: DayOfWeek,
    pub is_today: bool,
    pub aggregate: Option<&'a DayAggregate>,
}

impl MonthGrid {
    /// Grid of the month containing `view_date`; only its year and month matter.
    pub fn build(view_date: NaiveDate, week_start: WeekStart) -> Self {
        let first = view_date.first_of_month();
        let days_in_month = first.days_in_month();
        let leading = week_start.column_of(first.weekday()) as usize;

        let mut cells: Vec<MonthCell> = Vec::with_capacity(42);
        cells.extend(iter::repeat_n(None, leading));
        cells.extend((1..=days_in_month).map(Some));
        let remainder = cells.len() % 7;
        if remainder != 0 {
            cells.extend(iter::repeat_n(None, 7 - remainder));
        }

        let weeks = cells
            .chunks_exact(7)
            .map(|chunk| {
                let mut week: Week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect();

        Self {
            year: first.year(),
            month0: first.month0(),
            days_in_month,
            week_start,
            weeks,
        }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = MonthCell> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().copied())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn title(&self) -> String {
        format!("{}-{:02}", self.year, self.month())
    }

    pub fn weekday_at(&self, column: usize) -> DayOfWeek {
        self.week_start.days()[column % 7]
    }

    pub fn date_key(&self, day: u32) -> DateKey {
        DateKey::from_parts(self.year, self.month0 as i32, day as i32)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        today.year() == self.year && today.month0() == self.month0 && today.day() == day
    }

    /// Each week with real days resolved against `index`; padding stays `None`.
    pub fn annotate<'a>(&self, index: &'a DayIndex, today: NaiveDate) -> Vec<[Option<DayCell<'a>>; 7]> {
        self.weeks
            .iter()
            .map(|week| {
                std::array::from_fn(|column| {
                    week[column].map(|day| {
                        let key = self.date_key(day);
                        DayCell {
                            day,
                            aggregate: index.get(&key),
                            key,
                            weekday: self.weekday_at(column),
                            is_today: self.is_today(day, today),
                        }
                    })
                })
            })
            .collect()
    }
}
