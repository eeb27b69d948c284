use crate::calendar::date_key::DateKey;
use crate::core::models::Todo;
use crate::core::types::Date;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Longest inclusive span a single todo may expand to (ten years of days).
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 3660;

/// Todos touching one day: how many, and their titles in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayAggregate {
    pub count: usize,
    pub titles: Vec<String>,
}

impl DayAggregate {
    fn push(&mut self, title: &str) {
        self.count += 1;
        self.titles.push(title.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnparsableDate,
    RangeTooLarge { days: i64 },
}

/// A todo left out of the index, kept so callers can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTodo {
    pub todo_id: i64,
    pub title: String,
    pub reason: SkipReason,
}

/// Sparse day -> aggregate map. Days no todo touches have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayIndex {
    days: BTreeMap<DateKey, DayAggregate>,
    skipped: Vec<SkippedTodo>,
}

impl DayIndex {
    pub fn get(&self, key: &DateKey) -> Option<&DayAggregate> {
        self.days.get(key)
    }

    pub fn get_date(&self, date: NaiveDate) -> Option<&DayAggregate> {
        self.days.get(&DateKey::from_date(date))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, DateKey, DayAggregate> {
        self.days.iter()
    }

    pub fn skipped(&self) -> &[SkippedTodo] {
        &self.skipped
    }
}

/// Parsed, inclusive day range of one todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TodoSpan {
    /// Inclusive day count; zero or negative for a reversed range.
    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeIndexer {
    max_span_days: u32,
}

impl Default for DateRangeIndexer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPAN_DAYS)
    }
}

impl DateRangeIndexer {
    pub fn new(max_span_days: u32) -> Self {
        Self { max_span_days }
    }

    pub fn max_span_days(&self) -> u32 {
        self.max_span_days
    }

    pub fn span_of(&self, todo: &Todo) -> std::result::Result<TodoSpan, SkipReason> {
        let start = Date::try_from_str(&todo.start_date).map_err(|_| SkipReason::UnparsableDate)?;
        let end = Date::try_from_str(&todo.end_date).map_err(|_| SkipReason::UnparsableDate)?;
        let span = TodoSpan {
            start: start.0,
            end: end.0,
        };
        let days = span.days();
        if days > i64::from(self.max_span_days) {
            return Err(SkipReason::RangeTooLarge { days });
        }
        Ok(span)
    }

    /// Rebuilds the whole index from `todos`. Unreadable or oversized todos
    /// are skipped and listed in [`DayIndex::skipped`].
    pub fn build(&self, todos: &[Todo]) -> DayIndex {
        let mut index = DayIndex::default();
        for todo in todos {
            match self.span_of(todo) {
                Ok(span) => Self::expand_into(&mut index, todo, span),
                Err(reason) => index.skipped.push(SkippedTodo {
                    todo_id: todo.id,
                    title: todo.title.clone(),
                    reason,
                }),
            }
        }
        index
    }

    /// Like [`DateRangeIndexer::build`], but an oversized span is an error
    /// instead of a skip. Unreadable dates are still skipped.
    pub fn try_build(&self, todos: &[Todo]) -> Result<DayIndex> {
        let index = self.build(todos);
        let oversized = index.skipped.iter().find_map(|s| match s.reason {
            SkipReason::RangeTooLarge { days } => Some((s.todo_id, days)),
            SkipReason::UnparsableDate => None,
        });
        match oversized {
            Some((todo_id, days)) => Err(Error::RangeTooLarge {
                todo_id,
                days,
                max: self.max_span_days,
            }),
            None => Ok(index),
        }
    }

    fn expand_into(index: &mut DayIndex, todo: &Todo, span: TodoSpan) {
        for day in span.iter_days() {
            index
                .days
                .entry(DateKey::from_date(day))
                .or_default()
                .push(&todo.title);
        }
    }
}

/// Index with the default span guard.
pub fn build_index(todos: &[Todo]) -> DayIndex {
    DateRangeIndexer::default().build(todos)
}
