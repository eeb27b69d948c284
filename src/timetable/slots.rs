use crate::core::models::Schedule;
use crate::core::types::{DayOfWeek, HourRange, WeekStart};
use std::collections::HashMap;

/// First schedule, in input order, whose weekday matches and whose
/// `[start_time, end_time)` contains `hour`. Overlaps are not reported.
pub fn slot_at(schedules: &[Schedule], weekday: DayOfWeek, hour: u32) -> Option<&Schedule> {
    schedules.iter().find(|s| s.covers(weekday, hour))
}

/// Vertical placement of a schedule drawn as one contiguous block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBlock {
    pub start_hour: u32,
    /// Number of hour slots the block covers.
    pub span: u32,
}

impl SlotBlock {
    pub fn for_schedule(schedule: &Schedule) -> Self {
        Self {
            start_hour: schedule.start_time,
            span: schedule.span_hours(),
        }
    }

    pub fn height(&self, slot_height: u32) -> u32 {
        self.span * slot_height
    }

    /// Distance from the top of the grid to the top of the block.
    pub fn offset(&self, hours: HourRange, slot_height: u32) -> u32 {
        self.start_hour.saturating_sub(hours.first) * slot_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCell<'a> {
    pub weekday: DayOfWeek,
    pub hour: u32,
    pub schedule: Option<&'a Schedule>,
    /// The occupying schedule begins in this slot, so its block is drawn here.
    pub is_start: bool,
}

impl SlotCell<'_> {
    pub fn block(&self) -> Option<SlotBlock> {
        match self.schedule {
            Some(s) if self.is_start => Some(SlotBlock::for_schedule(s)),
            _ => None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.schedule.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow<'a> {
    pub hour: u32,
    pub cells: [SlotCell<'a>; 7],
}

/// Hours x weekdays grid, filled by a per-cell scan of the schedule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable<'a> {
    week_start: WeekStart,
    hours: HourRange,
    rows: Vec<TimetableRow<'a>>,
}

impl<'a> Timetable<'a> {
    pub fn build(schedules: &'a [Schedule], week_start: WeekStart, hours: HourRange) -> Self {
        let columns = week_start.days();
        let rows = hours
            .hours()
            .map(|hour| TimetableRow {
                hour,
                cells: columns.map(|weekday| {
                    let schedule = slot_at(schedules, weekday, hour);
                    SlotCell {
                        weekday,
                        hour,
                        schedule,
                        is_start: schedule.is_some_and(|s| s.start_time == hour),
                    }
                }),
            })
            .collect();

        Self {
            week_start,
            hours,
            rows,
        }
    }

    pub fn rows(&self) -> &[TimetableRow<'a>] {
        &self.rows
    }

    pub fn columns(&self) -> [DayOfWeek; 7] {
        self.week_start.days()
    }

    pub fn hours(&self) -> HourRange {
        self.hours
    }

    pub fn cell(&self, weekday: DayOfWeek, hour: u32) -> Option<&SlotCell<'a>> {
        self.rows
            .iter()
            .find(|row| row.hour == hour)
            .and_then(|row| row.cells.iter().find(|c| c.weekday == weekday))
    }
}

/// Precomputed (weekday, hour) -> schedule lookup with the same
/// first-match-wins rule as [`slot_at`].
#[derive(Debug, Clone, Default)]
pub struct WeekSlotMap<'a> {
    slots: HashMap<(DayOfWeek, u32), &'a Schedule>,
}

impl<'a> WeekSlotMap<'a> {
    pub fn build(schedules: &'a [Schedule]) -> Self {
        let mut slots = HashMap::new();
        for schedule in schedules {
            for hour in schedule.start_time..schedule.end_time {
                slots.entry((schedule.weekday, hour)).or_insert(schedule);
            }
        }
        Self { slots }
    }

    pub fn get(&self, weekday: DayOfWeek, hour: u32) -> Option<&'a Schedule> {
        self.slots.get(&(weekday, hour)).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
