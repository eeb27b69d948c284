use crate::calendar::d_day::DDay;
use crate::core::types::DayOfWeek;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a todo's content when it has none.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "No content.";

pub trait BaseEntity {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

// =====
// Todo
// =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "todoId")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Todo {
    pub fn new(
        title: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: 1,
            user_id: None,
            title: title.into(),
            content: None,
            start_date: start_date.into(),
            end_date: end_date.into(),
            completed: false,
            created_at: None,
            completed_at: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Content, or the placeholder when it is absent or blank.
    pub fn content_or_placeholder(&self) -> &str {
        match self.content.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => EMPTY_CONTENT_PLACEHOLDER,
        }
    }

    pub fn period(&self) -> String {
        format!("{} ~ {}", self.start_date, self.end_date)
    }
}

impl BaseEntity for Todo {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Todo(id={}, title='{}', period={}, completed={})",
            self.id,
            self.title,
            self.period(),
            self.completed
        )
    }
}

/// Fields the store needs to create a todo; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub start_date: String,
    pub end_date: String,
}

// =========
// Schedule
// =========

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "scheduleId")]
    pub id: i64,
    pub weekday: DayOfWeek,
    pub start_time: u32,
    pub end_time: u32,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Schedule {
    pub fn new(title: impl Into<String>, weekday: DayOfWeek, start_time: u32, end_time: u32) -> Self {
        Self {
            id: 1,
            weekday,
            start_time,
            end_time,
            title: title.into(),
            content: None,
            color: String::new(),
            user_id: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Half-open: `start_time <= hour < end_time`.
    pub fn covers(&self, weekday: DayOfWeek, hour: u32) -> bool {
        self.weekday == weekday && self.start_time <= hour && hour < self.end_time
    }

    pub fn span_hours(&self) -> u32 {
        self.end_time.saturating_sub(self.start_time)
    }
}

impl BaseEntity for Schedule {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schedule(id={}, title='{}', weekday={}, hours={}-{})",
            self.id, self.title, self.weekday, self.start_time, self.end_time
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub user_id: Option<i64>,
    pub weekday: DayOfWeek,
    pub start_time: u32,
    pub end_time: u32,
    pub title: String,
    pub content: Option<String>,
    pub color: String,
}

// =========
// TaskCard
// =========

/// One entry of the assignments list: a todo with its period and countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub period: String,
    pub content: String,
    pub d_day: DDay,
}

impl TaskCard {
    pub fn from_todo(todo: &Todo, today: NaiveDate) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            period: todo.period(),
            content: todo.content_or_placeholder().to_string(),
            d_day: DDay::until(&todo.end_date, today),
        }
    }
}

/// Cards in todo order, evaluated against `today`.
pub fn task_cards(todos: &[Todo], today: NaiveDate) -> Vec<TaskCard> {
    todos
        .iter()
        .map(|todo| TaskCard::from_todo(todo, today))
        .collect()
}
