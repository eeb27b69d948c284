pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DisplayHoursConfigItem, FileLoggingConfigItem, MaxSpanConfigItem,
    WeekStartConfigItem,
};
use crate::core::types::{HourRange, WeekStart};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    CalendarWeekStart,
    TimetableWeekStart,
    DisplayHours,
    MaxSpanDays,
    FileLoggingEnabled,
}

/// On-disk layout. Every item is optional and falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "WeekStartConfigItem::calendar")]
    pub calendar_week_start: WeekStartConfigItem,
    #[serde(default = "WeekStartConfigItem::timetable")]
    pub timetable_week_start: WeekStartConfigItem,
    #[serde(default)]
    pub display_hours: DisplayHoursConfigItem,
    #[serde(default)]
    pub max_span_days: MaxSpanConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            calendar_week_start: WeekStartConfigItem::calendar(),
            timetable_week_start: WeekStartConfigItem::timetable(),
            display_hours: DisplayHoursConfigItem::default(),
            max_span_days: MaxSpanConfigItem::default(),
            file_logging_enabled: FileLoggingConfigItem::default(),
        }
    }
}

/// Planner settings. A config with no path lives in memory only; one loaded
/// from (or bound to) a file is rewritten after every successful edit.
#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
    last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
            last_change: None,
        })
    }

    /// Like [`Config::load_from`], but a missing file yields the defaults bound
    /// to `path`. The file is not created until the first edit.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            })
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn calendar_week_start(&self) -> WeekStart {
        *self.data.calendar_week_start.get_value()
    }
    pub fn timetable_week_start(&self) -> WeekStart {
        *self.data.timetable_week_start.get_value()
    }
    pub fn display_hours(&self) -> HourRange {
        *self.data.display_hours.get_value()
    }
    pub fn max_span_days(&self) -> u32 {
        *self.data.max_span_days.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::CalendarWeekStart => self.calendar_week_start().to_string(),
            ConfigKey::TimetableWeekStart => self.timetable_week_start().to_string(),
            ConfigKey::DisplayHours => self.display_hours().to_string(),
            ConfigKey::MaxSpanDays => self.max_span_days().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::CalendarWeekStart => self.data.calendar_week_start.description(),
            ConfigKey::TimetableWeekStart => self.data.timetable_week_start.description(),
            ConfigKey::DisplayHours => self.data.display_hours.description(),
            ConfigKey::MaxSpanDays => self.data.max_span_days.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    /// `(key, description, value)` for every key, in declaration order.
    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.description_of(key).to_string(),
                        self.value_of(key),
                    )
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_of(key);
        self.edit(|cfg| apply(cfg, key, new_value))?;
        self.last_change = Some((key.to_string(), old, self.value_of(key)));
        Ok(())
    }

    /// `(key, old, new)` of the last successful edit, once.
    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = parse_key(key_str)?;
        self.set_key(key, new_value)
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut staged = self.data.clone();
        f(&mut staged)?;
        self.data = staged;
        self.save()
    }
}

fn parse_key(key_str: &str) -> Result<ConfigKey> {
    ConfigKey::from_str(key_str.trim()).map_err(|_| {
        Error::config(format!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key_str.trim(),
            valid_csv::<ConfigKey>()
        ))
    })
}

fn apply(cfg: &mut ConfigFile, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::CalendarWeekStart => cfg.calendar_week_start.set_value(value),
        ConfigKey::TimetableWeekStart => cfg.timetable_week_start.set_value(value),
        ConfigKey::DisplayHours => cfg.display_hours.set_value(value),
        ConfigKey::MaxSpanDays => cfg.max_span_days.set_value(value),
        ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(value),
    }
}
