use crate::calendar::date_index::DayIndex;
use crate::calendar::month_grid::{DayCell, MonthGrid};
use crate::core::models::{Schedule, TaskCard, Todo};
use crate::core::types::PaletteColor;
use crate::timetable::slots::{SlotCell, Timetable};
use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_REVERSE, styled};
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;

/// Marks an hour that continues a block started above it.
pub const CONTINUATION: &str = "┆";

/// Turns planner data into table rows. Cells may carry ANSI styling.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder {
    util: WidthUtil,
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_card_rows(&self, cards: &[TaskCard]) -> Vec<Vec<String>> {
        cards
            .iter()
            .map(|c| {
                let d_day = if c.d_day.is_valid() {
                    c.d_day.to_string()
                } else {
                    styled(FG_LIGHT_GRAY, &c.d_day.to_string())
                };
                vec![
                    c.id.clone(),
                    c.title.clone(),
                    c.period.clone(),
                    d_day,
                    c.content.clone(),
                ]
            })
            .collect()
    }

    pub fn todo_rows(&self, todos: &[Todo]) -> Vec<Vec<String>> {
        todos
            .iter()
            .map(|t| {
                let cells = [
                    t.id.to_string(),
                    if t.completed { "[x]" } else { "[ ]" }.to_string(),
                    t.title.clone(),
                    t.period(),
                    t.content_or_placeholder().to_string(),
                ];
                if t.completed {
                    cells.iter().map(|c| styled(FG_LIGHT_GRAY, c)).collect()
                } else {
                    cells.to_vec()
                }
            })
            .collect()
    }

    /// One row per week. A day shows its number, its todo count in
    /// parentheses, and is reversed when it is today.
    pub fn calendar_rows(&self, grid: &MonthGrid, index: &DayIndex, today: NaiveDate) -> Vec<Vec<String>> {
        grid.annotate(index, today)
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| cell.as_ref().map(day_label).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// `(date, count, titles)` for every indexed day of the grid's month.
    pub fn calendar_detail_rows(&self, grid: &MonthGrid, index: &DayIndex) -> Vec<Vec<String>> {
        (1..=grid.days_in_month())
            .filter_map(|day| {
                let key = grid.date_key(day);
                index.get(&key).map(|agg| {
                    vec![
                        key.to_string(),
                        agg.count.to_string(),
                        agg.titles.join(", "),
                    ]
                })
            })
            .collect()
    }

    /// Hour label then one cell per column. Titles are cut to `cell_width`.
    /// A block that starts above the first shown hour is titled in the top row.
    pub fn timetable_rows(&self, table: &Timetable<'_>, cell_width: usize) -> Vec<Vec<String>> {
        let first_hour = table.hours().first;
        table
            .rows()
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(8);
                cells.push(format!("{:02}:00", row.hour));
                cells.extend(
                    row.cells
                        .iter()
                        .map(|c| self.slot_label(c, row.hour == first_hour, cell_width)),
                );
                cells
            })
            .collect()
    }

    fn slot_label(&self, cell: &SlotCell<'_>, top_row: bool, cell_width: usize) -> String {
        match cell.schedule {
            None => String::new(),
            Some(schedule) if cell.is_start || top_row => {
                paint_schedule(schedule, &self.util.truncate(&schedule.title, cell_width))
            }
            Some(schedule) => paint_schedule(schedule, CONTINUATION),
        }
    }

    pub fn schedule_rows(&self, schedules: &[Schedule]) -> Vec<Vec<String>> {
        schedules
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.weekday.to_string(),
                    format!("{}-{}", s.start_time, s.end_time),
                    paint_schedule(s, &s.title),
                    s.content.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

fn day_label(cell: &DayCell<'_>) -> String {
    let base = match cell.aggregate {
        Some(agg) => format!("{:>2} ({})", cell.day, agg.count),
        None => format!("{:>2}", cell.day),
    };
    if cell.is_today {
        styled(&format!("{STYLE_BOLD}{STYLE_REVERSE}"), &base)
    } else {
        base
    }
}

/// Paints with the schedule's color token; unknown tokens stay unpainted.
fn paint_schedule(schedule: &Schedule, text: &str) -> String {
    match PaletteColor::from_token(&schedule.color) {
        Some(color) => color.paint(text),
        None => text.to_string(),
    }
}
