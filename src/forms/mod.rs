//! In-progress form state for todos and schedules, validated before commit.

pub mod schedule_draft;
pub mod todo_draft;
