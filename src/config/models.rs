use crate::calendar::date_index::DEFAULT_MAX_SPAN_DAYS;
use crate::core::types::{Bool, HourRange, WeekStart};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStartConfigItem {
    pub value: WeekStart,
    pub description: String,
}

impl WeekStartConfigItem {
    pub fn calendar() -> Self {
        Self {
            value: WeekStart::Sunday,
            description: "First weekday column of the month calendar.".into(),
        }
    }

    pub fn timetable() -> Self {
        Self {
            value: WeekStart::Monday,
            description: "First weekday column of the weekly timetable.".into(),
        }
    }
}

impl ConfigItem<WeekStart> for WeekStartConfigItem {
    fn get_value(&self) -> &WeekStart {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = WeekStart::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayHoursConfigItem {
    pub value: HourRange,
    pub description: String,
}

impl Default for DisplayHoursConfigItem {
    fn default() -> Self {
        Self {
            value: HourRange::DEFAULT,
            description: "First and last hour row of the timetable.".into(),
        }
    }
}

impl ConfigItem<HourRange> for DisplayHoursConfigItem {
    fn get_value(&self) -> &HourRange {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = HourRange::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxSpanConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for MaxSpanConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_MAX_SPAN_DAYS,
            description: "Longest todo, in days, the calendar will expand.".into(),
        }
    }
}

impl ConfigItem<u32> for MaxSpanConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let days: u32 = new_value.trim().parse().map_err(|_| {
            Error::Parse(format!(
                "Invalid day count: '{}'. Expected a positive whole number.",
                new_value.trim()
            ))
        })?;
        if days == 0 {
            return Err(Error::Parse("Day count must be at least 1.".into()));
        }
        self.value = days;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
