use crate::calendar::date_index::DayIndex;
use crate::calendar::month_grid::MonthGrid;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::models::{Schedule, TaskCard, Todo};
use crate::core::store::PlannerStore;
use crate::core::types::Tab;
use crate::errors::Result;
use crate::extensions::chrono::WeekdayExt;
use crate::timetable::slots::Timetable;
use crate::ui::chrome::UiChrome;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use chrono::{Datelike, NaiveDate};
use std::io::{self, Write};

const HOUR_COLUMN_WIDTH: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
    pub chrome: UiChrome,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows: Vec<Vec<String>> = config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect();
        self.printer.render_table(
            "Config",
            &headers,
            &rows,
            Some("No config items found."),
            None,
            out,
        )
    }

    pub fn render_task_cards<W: Write + ?Sized>(&self, cards: &[TaskCard], out: &mut W) -> io::Result<()> {
        let headers = ["ID", "TITLE", "PERIOD", "D-DAY", "CONTENT"];
        let rows = self.data.task_card_rows(cards);
        self.printer
            .render_table("Assignments", &headers, &rows, Some("No assignments."), None, out)
    }

    pub fn render_todos<W: Write + ?Sized>(&self, todos: &[Todo], out: &mut W) -> io::Result<()> {
        let headers = ["ID", "DONE", "TITLE", "PERIOD", "CONTENT"];
        let rows = self.data.todo_rows(todos);
        self.printer
            .render_table("Todos", &headers, &rows, Some("No todos yet."), None, out)
    }

    /// Month grid followed by the todos of each busy day.
    pub fn render_calendar<W: Write + ?Sized>(
        &self,
        grid: &MonthGrid,
        index: &DayIndex,
        today: NaiveDate,
        out: &mut W,
    ) -> io::Result<()> {
        let headers = grid.week_start().labels();
        let rows = self.data.calendar_rows(grid, index, today);
        let title = format!("Calendar {}", grid.title());
        self.printer
            .render_table(&title, &headers, &rows, None, None, out)?;

        let details = self.data.calendar_detail_rows(grid, index);
        if !details.is_empty() {
            self.printer.render_table(
                "Todos this month",
                &["DATE", "COUNT", "TITLES"],
                &details,
                None,
                None,
                out,
            )?;
        }
        Ok(())
    }

    /// Today's weekday column is marked with `*`.
    pub fn render_timetable<W: Write + ?Sized>(
        &self,
        table: &Timetable<'_>,
        today: NaiveDate,
        out: &mut W,
    ) -> io::Result<()> {
        let current = today.weekday().to_day_of_week();
        let labels = table.columns().map(|d| {
            if d == current {
                format!("{d}*")
            } else {
                d.to_string()
            }
        });
        let mut headers: Vec<&str> = Vec::with_capacity(8);
        headers.push("HOUR");
        headers.extend(labels.iter().map(String::as_str));

        let cell_width = self.util.cell_width_for(7, HOUR_COLUMN_WIDTH, 4, 14);
        let rows = self.data.timetable_rows(table, cell_width);
        let min_width = HOUR_COLUMN_WIDTH + 7 * (cell_width + 3);
        self.printer
            .render_table("Timetable", &headers, &rows, None, Some(min_width), out)
    }

    pub fn render_schedules<W: Write + ?Sized>(&self, schedules: &[Schedule], out: &mut W) -> io::Result<()> {
        let headers = ["ID", "DAY", "HOURS", "TITLE", "CONTENT"];
        let rows = self.data.schedule_rows(schedules);
        self.printer
            .render_table("Schedules", &headers, &rows, Some("No schedules yet."), None, out)
    }

    /// Title, tab strip, then the active tab of `ctx`.
    pub fn render_view<S: PlannerStore, W: Write + ?Sized>(
        &self,
        ctx: &AppContext<S>,
        today: NaiveDate,
        out: &mut W,
    ) -> Result<()> {
        self.chrome
            .render_title(&today.format("%Y-%m-%d").to_string(), out)?;
        self.chrome.render_tab_bar(ctx.view.tab, out)?;

        match ctx.view.tab {
            Tab::Tasks => self.render_task_cards(&ctx.task_cards(today)?, out)?,
            Tab::Todos => self.render_todos(&ctx.todos()?, out)?,
            Tab::Calendar => {
                let index = ctx.day_index()?;
                self.render_calendar(&ctx.month_grid(), &index, today, out)?
            }
            Tab::Timetable => {
                let schedules = ctx.schedules()?;
                let table = Timetable::build(
                    &schedules,
                    ctx.config.timetable_week_start(),
                    ctx.config.display_hours(),
                );
                self.render_timetable(&table, today, out)?;
                self.render_schedules(&schedules, out)?
            }
            Tab::Config => self.render_config(&ctx.config, out)?,
        }
        Ok(())
    }
}
