use crate::calendar::date_index::{DateRangeIndexer, DayIndex, SkipReason};
use crate::calendar::month_grid::MonthGrid;
use crate::config::{Config, ConfigKey};
use crate::core::cli::{CliAction, CliOptions};
use crate::core::models::{Schedule, TaskCard, Todo, task_cards};
use crate::core::persist::{load_snapshot_or_default, save_snapshot};
use crate::core::store::{MemoryStore, PlannerStore};
use crate::core::types::Tab;
use crate::errors::Result;
use crate::extensions::chrono::NaiveDateExt;
use crate::forms::schedule_draft::ScheduleDraft;
use crate::forms::todo_draft::TodoDraft;
use crate::logging::{LogTarget, Logger};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What the user is looking at. The calendar only cares about the year and
/// month of `view_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view_date: NaiveDate,
    pub tab: Tab,
    pub todo_draft: TodoDraft,
    pub schedule_draft: ScheduleDraft,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view_date: today,
            tab: Tab::default(),
            todo_draft: TodoDraft::default(),
            schedule_draft: ScheduleDraft::default(),
        }
    }

    pub fn prev_month(&mut self) {
        self.view_date = self.view_date.shift_months_rolling(-1);
    }

    pub fn next_month(&mut self) {
        self.view_date = self.view_date.shift_months_rolling(1);
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }
}

#[derive(Debug)]
pub struct AppContext<S: PlannerStore = MemoryStore> {
    pub config: Config,
    pub logger: Logger,
    pub store: S,
    pub view: ViewState,
    /// Attached to everything this session creates.
    pub owner: Option<i64>,
}

impl AppContext<MemoryStore> {
    /// Loads config and snapshot named by `options`. Missing files mean
    /// defaults and an empty store.
    pub fn from_options(options: &CliOptions, today: NaiveDate) -> Result<Self> {
        let config = Config::load_or_default(&options.config_path)?;
        let logger = Logger::with_log_dir(&options.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let store = MemoryStore::from_snapshot(load_snapshot_or_default(&options.data_path)?)?;
        logger.info(
            format!(
                "Loaded {} todo(s) and {} schedule(s) from '{}'.",
                store.todo_count(),
                store.schedule_count(),
                options.data_path.display()
            ),
            LogTarget::FileOnly,
        );

        let mut ctx = Self::new(config, logger, store, today);
        ctx.view.tab = options.view;
        if let Some(month) = options.month {
            ctx.view.view_date = month;
        }
        Ok(ctx)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<PathBuf> {
        let saved = save_snapshot(&self.store.to_snapshot(), path)?;
        self.logger.info(
            format!("Saved snapshot to '{}'.", saved.display()),
            LogTarget::FileOnly,
        );
        Ok(saved)
    }
}

impl<S: PlannerStore> AppContext<S> {
    pub fn new(config: Config, logger: Logger, store: S, today: NaiveDate) -> Self {
        Self {
            config,
            logger,
            store,
            view: ViewState::new(today),
            owner: None,
        }
    }

    pub fn todos(&self) -> Result<Vec<Todo>> {
        self.store.list_todos()
    }

    pub fn schedules(&self) -> Result<Vec<Schedule>> {
        self.store.list_schedules()
    }

    /// Rebuilds the day index from the current todo list. Skipped todos are
    /// reported as warnings and otherwise ignored.
    pub fn day_index(&self) -> Result<DayIndex> {
        let todos = self.todos()?;
        let index = DateRangeIndexer::new(self.config.max_span_days()).build(&todos);
        for skipped in index.skipped() {
            let why = match skipped.reason {
                SkipReason::UnparsableDate => "its dates could not be read".to_string(),
                SkipReason::RangeTooLarge { days } => format!(
                    "it spans {days} days (limit {})",
                    self.config.max_span_days()
                ),
            };
            self.logger.warn(
                format!(
                    "Todo {} '{}' left off the calendar: {why}.",
                    skipped.todo_id, skipped.title
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(index)
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(self.view.view_date, self.config.calendar_week_start())
    }

    pub fn task_cards(&self, today: NaiveDate) -> Result<Vec<TaskCard>> {
        Ok(task_cards(&self.todos()?, today))
    }

    /// Creates a todo from the draft. The draft is cleared only on success.
    pub fn submit_todo_draft(&mut self) -> Result<Todo> {
        let new = self.view.todo_draft.to_new_todo(self.owner)?;
        let todo = self.store.create_todo(new)?;
        self.view.todo_draft.clear();
        self.logger.info(
            format!("Created todo {} '{}' ({}).", todo.id, todo.title, todo.period()),
            LogTarget::FileOnly,
        );
        Ok(todo)
    }

    /// Creates one schedule per selected weekday. Creation stops at the first
    /// store failure; records created before it are kept.
    pub fn submit_schedule_draft(&mut self) -> Result<Vec<Schedule>> {
        let requests = self
            .view
            .schedule_draft
            .to_new_schedules(self.owner, self.config.display_hours())?;
        let mut created = Vec::with_capacity(requests.len());
        for new in requests {
            match self.store.create_schedule(new) {
                Ok(schedule) => {
                    self.logger.info(
                        format!(
                            "Created schedule {} '{}' on {} {}-{}.",
                            schedule.id,
                            schedule.title,
                            schedule.weekday,
                            schedule.start_time,
                            schedule.end_time
                        ),
                        LogTarget::FileOnly,
                    );
                    created.push(schedule);
                }
                Err(err) => {
                    self.logger.error(
                        format!(
                            "Schedule creation stopped after {} record(s): {err}",
                            created.len()
                        ),
                        LogTarget::FileOnly,
                    );
                    return Err(err);
                }
            }
        }
        self.view.schedule_draft.clear();
        Ok(created)
    }

    pub fn toggle_todo(&mut self, id: i64) -> Result<Todo> {
        let current = self
            .todos()?
            .into_iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .unwrap_or(false);
        let todo = self.store.set_todo_completed(id, !current)?;
        self.logger.info(
            format!("Todo {} marked {}.", todo.id, if todo.completed { "completed" } else { "open" }),
            LogTarget::FileOnly,
        );
        Ok(todo)
    }

    pub fn delete_todo(&mut self, id: i64) -> Result<()> {
        self.store.delete_todo(id)?;
        self.logger
            .info(format!("Deleted todo {id}."), LogTarget::FileOnly);
        Ok(())
    }

    pub fn delete_schedule(&mut self, id: i64) -> Result<()> {
        self.store.delete_schedule(id)?;
        self.logger
            .info(format!("Deleted schedule {id}."), LogTarget::FileOnly);
        Ok(())
    }

    /// Sets one config key and writes the config file. File logging follows
    /// `FILE_LOGGING_ENABLED` immediately.
    pub fn set_config(&mut self, key: &str, value: &str) -> Result<()> {
        self.config.set(key, value)?;
        if let Some((key, old, new)) = self.config.take_last_change() {
            if key == ConfigKey::FileLoggingEnabled.as_ref() {
                self.logger
                    .set_file_logging_enabled(self.config.file_logging_enabled());
            }
            self.logger.info(
                format!("Config {key} changed from '{old}' to '{new}'."),
                LogTarget::FileOnly,
            );
        }
        Ok(())
    }

    pub fn apply(&mut self, action: CliAction) -> Result<()> {
        match action {
            CliAction::AddTodo(draft) => {
                self.view.todo_draft = draft;
                self.submit_todo_draft().map(|_| ())
            }
            CliAction::ToggleTodo(id) => self.toggle_todo(id).map(|_| ()),
            CliAction::DeleteTodo(id) => self.delete_todo(id),
            CliAction::AddSchedule(draft) => {
                self.view.schedule_draft = draft;
                self.submit_schedule_draft().map(|_| ())
            }
            CliAction::DeleteSchedule(id) => self.delete_schedule(id),
            CliAction::SetConfig(key, value) => self.set_config(&key, &value),
        }
    }
}
