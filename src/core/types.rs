use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// The seven weekday tokens schedules are keyed by. Declaration order is
/// Monday-first, which is also the `Ord` used by drafts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    #[strum(serialize = "mon", serialize = "monday", serialize = "mon.", to_string = "MON")]
    Mon,
    #[strum(serialize = "tue", serialize = "tuesday", serialize = "tue.", to_string = "TUE")]
    Tue,
    #[strum(serialize = "wed", serialize = "wednesday", serialize = "wed.", to_string = "WED")]
    Wed,
    #[strum(serialize = "thu", serialize = "thursday", serialize = "thu.", to_string = "THU")]
    Thu,
    #[strum(serialize = "fri", serialize = "friday", serialize = "fri.", to_string = "FRI")]
    Fri,
    #[strum(serialize = "sat", serialize = "saturday", serialize = "sat.", to_string = "SAT")]
    Sat,
    #[strum(serialize = "sun", serialize = "sunday", serialize = "sun.", to_string = "SUN")]
    Sun,
}

impl DayOfWeek {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<DayOfWeek>()
            ))
        })
    }

    pub fn to_chrono(self) -> Weekday {
        match self {
            DayOfWeek::Mon => Weekday::Mon,
            DayOfWeek::Tue => Weekday::Tue,
            DayOfWeek::Wed => Weekday::Wed,
            DayOfWeek::Thu => Weekday::Thu,
            DayOfWeek::Fri => Weekday::Fri,
            DayOfWeek::Sat => Weekday::Sat,
            DayOfWeek::Sun => Weekday::Sun,
        }
    }
}

/// Which weekday occupies the first column of a 7-column view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[strum(serialize = "sunday", serialize = "sun", to_string = "sunday")]
    Sunday,
    #[strum(serialize = "monday", serialize = "mon", to_string = "monday")]
    Monday,
}

impl WeekStart {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid week start: '{}'. Valid values: {}",
                s.trim(),
                valid_csv::<WeekStart>()
            ))
        })
    }

    /// Column order for this convention.
    pub fn days(self) -> [DayOfWeek; 7] {
        use DayOfWeek::*;
        match self {
            WeekStart::Sunday => [Sun, Mon, Tue, Wed, Thu, Fri, Sat],
            WeekStart::Monday => [Mon, Tue, Wed, Thu, Fri, Sat, Sun],
        }
    }

    /// Zero-based column of `day` in this convention.
    pub fn column_of(self, day: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => day.num_days_from_sunday(),
            WeekStart::Monday => day.num_days_from_monday(),
        }
    }

    pub fn labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"],
            WeekStart::Monday => ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y")]
    MdYDash,
}

impl Date {
    pub fn usage() -> String {
        "Supported formats: YYYY-MM-DD, YYYY/MM/DD, MM-DD-YYYY, MM/DD/YYYY".to_string()
    }

    fn error_message(input: &str) -> String {
        format!("Invalid date format: '{}'. {}", input, Self::usage())
    }

    /// Reads a calendar date; a trailing time-of-day (`T...` or ` ...`) is dropped.
    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();
        let day_part = input
            .split_once(['T', ' '])
            .map(|(day, _)| day)
            .unwrap_or(&input);

        for f in DateFormat::iter() {
            if let Ok(date) = NaiveDate::parse_from_str(day_part, f.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::Parse(Self::error_message(&input)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Inclusive range of displayable hours, e.g. `9-20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub first: u32,
    pub last: u32,
}

impl HourRange {
    pub const DEFAULT: HourRange = HourRange { first: 9, last: 20 };

    pub fn new(first: u32, last: u32) -> Result<Self> {
        if first > last {
            return Err(Error::Parse(format!(
                "First hour '{first}' must not be later than last hour '{last}'."
            )));
        }
        if last > 24 {
            return Err(Error::Parse(format!(
                "Hour '{last}' is outside of a day (0-24)."
            )));
        }
        Ok(Self { first, last })
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (first, last) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid hour range format: '{}'. Expected format: '<first>-<last>'.",
                s
            ))
        })?;
        Self::new(parse_hour(first)?, parse_hour(last)?)
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.first <= hour && hour <= self.last
    }

    /// Every displayable hour, in order.
    pub fn hours(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        (self.last + 1).saturating_sub(self.first) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn parse_hour(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::Parse(format!("Invalid hour: '{}'. Expected a whole hour.", raw.trim())))
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl Serialize for HourRange {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HourRange {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<HourRange, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        HourRange::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// The views the planner can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Tab {
    Tasks,
    Todos,
    Calendar,
    Timetable,
    Config,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Tasks
    }
}

impl Tab {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported view: '{}'. Valid views: {}",
                s.trim(),
                valid_csv::<Tab>()
            ))
        })
    }
}

/// Named colors a schedule's display token may resolve to in the terminal.
/// Unknown tokens are kept as-is and rendered unpainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PaletteColor {
    #[strum(serialize = "red", to_string = "RED")]
    Red,
    #[strum(serialize = "orange", to_string = "ORANGE")]
    Orange,
    #[strum(serialize = "yellow", to_string = "YELLOW")]
    Yellow,
    #[strum(serialize = "green", to_string = "GREEN")]
    Green,
    #[strum(serialize = "light_blue", to_string = "LIGHT_BLUE")]
    LightBlue,
    #[strum(serialize = "blue", to_string = "BLUE")]
    Blue,
    #[strum(serialize = "violet", serialize = "purple", to_string = "VIOLET")]
    Violet,
    #[strum(serialize = "gray", serialize = "grey", to_string = "GRAY")]
    Gray,
}

impl PaletteColor {
    pub const RESET: &'static str = crate::csi!("0m");

    pub fn from_token(token: &str) -> Option<Self> {
        Self::from_str(token.trim()).ok()
    }

    /// Foreground ANSI color for this palette entry.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            PaletteColor::Red => crate::csi!("31m"),
            PaletteColor::Orange => crate::csi!("33m"),
            PaletteColor::Yellow => crate::csi!("33m"),
            PaletteColor::Green => crate::csi!("32m"),
            PaletteColor::LightBlue => crate::csi!("36m"),
            PaletteColor::Blue => crate::csi!("34m"),
            PaletteColor::Violet => crate::csi!("35m"),
            PaletteColor::Gray => crate::csi!("37m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }
}
