use crate::core::types::{DayOfWeek, Tab};
use crate::errors::{Error, Result, require_parse};
use crate::forms::schedule_draft::{ScheduleDraft, SpanField};
use crate::forms::todo_draft::{TodoDraft, TodoField};
use chrono::NaiveDate;
use std::path::PathBuf;

/// A change to apply to the store before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    AddTodo(TodoDraft),
    ToggleTodo(i64),
    DeleteTodo(i64),
    AddSchedule(ScheduleDraft),
    DeleteSchedule(i64),
    /// Key and raw value, written to the config file.
    SetConfig(String, String),
}

impl CliAction {
    /// Whether the action edits todos or schedules, so the snapshot needs saving.
    pub fn changes_store(&self) -> bool {
        !matches!(self, CliAction::SetConfig(..))
    }
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
    pub logs_dir: PathBuf,
    pub view: Tab,
    pub month: Option<NaiveDate>,
    pub actions: Vec<CliAction>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            data_path: PathBuf::from("dayboard.json"),
            logs_dir: PathBuf::from("logs"),
            view: Tab::default(),
            month: None,
            actions: Vec::new(),
        }
    }
}

pub const USAGE: &str = "\
Usage: dayboard [options]

  --config <path>          Settings file (default: config.json)
  --data <path>            Todo and schedule snapshot (default: dayboard.json)
  --logs <dir>             Log directory (default: logs)
  --view <tab>             tasks | todos | calendar | timetable | config
  --month <YYYY-MM>        Month shown by the calendar view
  --add-todo <title> <content> <start> <end>
  --toggle <todo-id>       Flip a todo between open and completed
  --delete-todo <todo-id>
  --add-schedule <title> <DAY:START-END>[,DAY:START-END...] [--color <color>]
  --delete-schedule <schedule-id>
  --set-config <KEY> <value>";

impl CliOptions {
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().peekable();
        let mut opts = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => opts.config_path = PathBuf::from(next_value(&mut args, "--config")?),
                "--data" => opts.data_path = PathBuf::from(next_value(&mut args, "--data")?),
                "--logs" => opts.logs_dir = PathBuf::from(next_value(&mut args, "--logs")?),
                "--view" => opts.view = Tab::try_from(&next_value(&mut args, "--view")?)?,
                "--month" => opts.month = Some(parse_month(&next_value(&mut args, "--month")?)?),
                "--add-todo" => {
                    let mut draft = TodoDraft::default();
                    for field in [
                        TodoField::Title,
                        TodoField::Content,
                        TodoField::StartDate,
                        TodoField::EndDate,
                    ] {
                        draft.set(field, next_value(&mut args, "--add-todo")?);
                    }
                    opts.actions.push(CliAction::AddTodo(draft));
                }
                "--toggle" => opts
                    .actions
                    .push(CliAction::ToggleTodo(parse_id(&next_value(&mut args, "--toggle")?)?)),
                "--delete-todo" => opts.actions.push(CliAction::DeleteTodo(parse_id(
                    &next_value(&mut args, "--delete-todo")?,
                )?)),
                "--add-schedule" => {
                    let title = next_value(&mut args, "--add-schedule")?;
                    let slots = next_value(&mut args, "--add-schedule")?;
                    let mut draft = parse_slots(&title, &slots)?;
                    if args.peek().map(String::as_str) == Some("--color") {
                        args.next();
                        draft.color = next_value(&mut args, "--color")?;
                    }
                    opts.actions.push(CliAction::AddSchedule(draft));
                }
                "--delete-schedule" => opts.actions.push(CliAction::DeleteSchedule(parse_id(
                    &next_value(&mut args, "--delete-schedule")?,
                )?)),
                "--set-config" => {
                    let key = next_value(&mut args, "--set-config")?;
                    let value = next_value(&mut args, "--set-config")?;
                    opts.actions.push(CliAction::SetConfig(key, value));
                }
                _ => return Err(Error::parse(format!("Unknown argument: {arg}"))),
            }
        }
        Ok(opts)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| Error::parse(format!("Missing value for {flag}")))
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::parse(format!("Invalid id: '{}'.", raw.trim())))
}

/// `YYYY-MM`, resolved to the first of that month.
pub fn parse_month(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").map_err(|_| {
        Error::parse(format!(
            "Invalid month: '{raw}'. Expected format: 'YYYY-MM'."
        ))
    })
}

/// Builds a draft from `MON:9-11,WED:13-15`. A weekday may appear once.
pub fn parse_slots(title: &str, raw: &str) -> Result<ScheduleDraft> {
    let mut draft = ScheduleDraft::new(title);

    for slot in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (day, hours) = require_parse(
            slot.split_once(':'),
            format!("Invalid slot: '{slot}'. Expected format: 'DAY:START-END'."),
        )?;
        let (start, end) = require_parse(
            hours.split_once('-'),
            format!("Invalid slot hours: '{hours}'. Expected format: 'START-END'."),
        )?;
        let day = DayOfWeek::try_from(day)?;
        if draft.is_selected(day) {
            return Err(Error::parse(format!("Weekday {day} is listed twice.")));
        }
        draft.toggle_weekday(day);
        draft.set_hour_str(day, SpanField::Start, start)?;
        draft.set_hour_str(day, SpanField::End, end)?;
    }
    Ok(draft)
}
