//! Weekly timetable: which schedule occupies each (weekday, hour) slot and
//! where its block starts.

pub mod slots;
#[cfg(test)]
mod tests;
