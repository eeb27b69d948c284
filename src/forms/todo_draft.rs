use crate::core::models::NewTodo;
use crate::errors::{Error, Result};
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum TodoField {
    Title,
    Content,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub content: String,
    pub start_date: String,
    pub end_date: String,
}

impl TodoDraft {
    pub fn set(&mut self, field: TodoField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TodoField::Title => self.title = value,
            TodoField::Content => self.content = value,
            TodoField::StartDate => self.start_date = value,
            TodoField::EndDate => self.end_date = value,
        }
    }

    fn get(&self, field: TodoField) -> &str {
        match field {
            TodoField::Title => &self.title,
            TodoField::Content => &self.content,
            TodoField::StartDate => &self.start_date,
            TodoField::EndDate => &self.end_date,
        }
    }

    /// Every field must be non-blank. Dates are not parsed here.
    pub fn validate(&self) -> Result<()> {
        use strum::IntoEnumIterator;
        match TodoField::iter().find(|f| self.get(*f).trim().is_empty()) {
            Some(field) => Err(Error::validation(format!("'{field}' must not be empty."))),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_new_todo(&self, owner: Option<i64>) -> Result<NewTodo> {
        self.validate()?;
        Ok(NewTodo {
            user_id: owner,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
