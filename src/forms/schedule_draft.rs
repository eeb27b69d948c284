use crate::core::models::NewSchedule;
use crate::core::types::{DayOfWeek, HourRange, parse_hour};
use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// Start/end hour chosen for one weekday of a draft, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSpan {
    pub start: u32,
    pub end: u32,
}

impl HourSpan {
    /// What a newly selected weekday starts with.
    pub const DEFAULT: HourSpan = HourSpan { start: 9, end: 10 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanField {
    Start,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub title: String,
    pub content: String,
    pub color: String,
    selections: BTreeMap<DayOfWeek, HourSpan>,
}

impl ScheduleDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Selects `day` with the default 9-10 span, or drops it and its span.
    /// Returns whether the day is selected afterwards.
    pub fn toggle_weekday(&mut self, day: DayOfWeek) -> bool {
        if self.selections.remove(&day).is_some() {
            false
        } else {
            self.selections.insert(day, HourSpan::DEFAULT);
            true
        }
    }

    pub fn is_selected(&self, day: DayOfWeek) -> bool {
        self.selections.contains_key(&day)
    }

    pub fn selection(&self, day: DayOfWeek) -> Option<HourSpan> {
        self.selections.get(&day).copied()
    }

    /// Selected weekdays, Monday first.
    pub fn selections(&self) -> impl Iterator<Item = (DayOfWeek, HourSpan)> + '_ {
        self.selections.iter().map(|(d, s)| (*d, *s))
    }

    /// Replaces one end of `day`'s span; other weekdays are untouched.
    pub fn set_hour(&mut self, day: DayOfWeek, field: SpanField, hour: u32) -> Result<()> {
        let span = self.selections.get_mut(&day).ok_or_else(|| {
            Error::validation(format!("{day} is not selected."))
        })?;
        match field {
            SpanField::Start => span.start = hour,
            SpanField::End => span.end = hour,
        }
        Ok(())
    }

    pub fn set_hour_str(&mut self, day: DayOfWeek, field: SpanField, raw: &str) -> Result<()> {
        self.set_hour(day, field, parse_hour(raw)?)
    }

    /// First reason the draft cannot be submitted. Overlaps with other
    /// schedules, or between selected weekdays, are not checked.
    pub fn validate(&self, hours: HourRange) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("Title must not be empty."));
        }
        if self.selections.is_empty() {
            return Err(Error::validation("Select at least one weekday."));
        }
        for (day, span) in &self.selections {
            if !hours.contains(span.start) {
                return Err(Error::validation(format!(
                    "{day}: start hour {} is outside {hours}.",
                    span.start
                )));
            }
            if !hours.contains(span.end) {
                return Err(Error::validation(format!(
                    "{day}: end hour {} is outside {hours}.",
                    span.end
                )));
            }
            if span.start >= span.end {
                return Err(Error::validation(format!(
                    "{day}: start hour {} must be earlier than end hour {}.",
                    span.start, span.end
                )));
            }
        }
        Ok(())
    }

    pub fn is_valid(&self, hours: HourRange) -> bool {
        self.validate(hours).is_ok()
    }

    /// One independent record per selected weekday.
    pub fn to_new_schedules(&self, owner: Option<i64>, hours: HourRange) -> Result<Vec<NewSchedule>> {
        self.validate(hours)?;
        let content = Some(self.content.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Ok(self
            .selections()
            .map(|(weekday, span)| NewSchedule {
                user_id: owner,
                weekday,
                start_time: span.start,
                end_time: span.end,
                title: self.title.trim().to_string(),
                content: content.clone(),
                color: self.color.clone(),
            })
            .collect())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
