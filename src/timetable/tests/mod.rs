
use crate::core::models::Schedule;
use crate::core::types::DayOfWeek;

pub(super) fn schedule(id: i64, title: &str, weekday: DayOfWeek, start: u32, end: u32) -> Schedule {
    let mut s = Schedule::new(title, weekday, start, end);
    s.id = id;
    s
}
