pub mod calendar;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod forms;
pub mod logging;
pub mod timetable;
pub mod ui;
