mod month_grid_tests;

use crate::core::models::Todo;
use chrono::NaiveDate;

pub(super) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn todo(id: i64, title: &str, start: &str, end: &str) -> Todo {
    let mut todo = Todo::new(title, start, end);
    todo.id = id;
    todo
}
