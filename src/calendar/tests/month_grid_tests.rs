use super::{todo, ymd};
use crate::calendar::date_index::build_index;
use crate::calendar::month_grid::MonthGrid;
use crate::core::types::{DayOfWeek, WeekStart};

fn assert_grid_invariants(grid: &MonthGrid) {
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells.len() % 7, 0);
    let days: Vec<u32> = cells.iter().flatten().copied().collect();
    let expected: Vec<u32> = (1..=grid.days_in_month()).collect();
    assert_eq!(days, expected);
    assert!(grid.weeks().iter().all(|w| w.len() == 7));
}

#[test]
fn february_starting_on_sunday_has_no_padding() {
    // 2015-02-01 is a Sunday and 2015 is not a leap year.
    let grid = MonthGrid::build(ymd(2015, 2, 14), WeekStart::Sunday);
    assert_grid_invariants(&grid);
    assert_eq!(grid.days_in_month(), 28);
    assert_eq!(grid.weeks().len(), 4);
    assert!(grid.cells().all(|c| c.is_some()));
    assert_eq!(grid.weeks()[0][0], Some(1));
}

#[test]
fn february_starting_on_monday_has_no_padding_for_monday_start() {
    // 2021-02-01 is a Monday.
    let grid = MonthGrid::build(ymd(2021, 2, 1), WeekStart::Monday);
    assert_grid_invariants(&grid);
    assert_eq!(grid.weeks().len(), 4);
    assert!(grid.cells().all(|c| c.is_some()));
}

#[test]
fn thirty_one_day_month_mid_week_pads_both_ends() {
    // 2024-05-01 is a Wednesday.
    let grid = MonthGrid::build(ymd(2024, 5, 20), WeekStart::Sunday);
    assert_grid_invariants(&grid);
    assert_eq!(grid.days_in_month(), 31);
    assert_eq!(grid.weeks()[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
    let last = grid.weeks().last().unwrap();
    assert_eq!(last, &[Some(26), Some(27), Some(28), Some(29), Some(30), Some(31), None]);
    assert_eq!(grid.weeks().len(), 5);
}

#[test]
fn week_start_shifts_leading_padding() {
    let sunday = MonthGrid::build(ymd(2024, 5, 1), WeekStart::Sunday);
    let monday = MonthGrid::build(ymd(2024, 5, 1), WeekStart::Monday);
    assert_eq!(sunday.weeks()[0].iter().filter(|c| c.is_none()).count(), 3);
    assert_eq!(monday.weeks()[0].iter().filter(|c| c.is_none()).count(), 2);
    assert_eq!(sunday.weekday_at(0), DayOfWeek::Sun);
    assert_eq!(monday.weekday_at(0), DayOfWeek::Mon);
    assert_grid_invariants(&monday);
}

#[test]
fn six_week_month_is_padded() {
    // 2024-03-01 is a Friday; 31 days starting on column 5 needs 6 rows.
    let grid = MonthGrid::build(ymd(2024, 3, 1), WeekStart::Sunday);
    assert_grid_invariants(&grid);
    assert_eq!(grid.weeks().len(), 6);
}

#[test]
fn every_month_of_a_year_keeps_invariants() {
    for month in 1..=12 {
        for start in [WeekStart::Sunday, WeekStart::Monday] {
            assert_grid_invariants(&MonthGrid::build(ymd(2024, month, 1), start));
        }
    }
}

#[test]
fn grid_keys_join_against_index() {
    let index = build_index(&[todo(1, "exam", "2024-01-30", "2024-02-02")]);
    let grid = MonthGrid::build(ymd(2024, 2, 10), WeekStart::Sunday);
    assert_eq!(grid.title(), "2024-02");
    assert!(index.get(&grid.date_key(1)).is_some());
    assert!(index.get(&grid.date_key(2)).is_some());
    assert!(index.get(&grid.date_key(3)).is_none());
}

#[test]
fn annotate_marks_today_and_aggregates() {
    let index = build_index(&[todo(1, "exam", "2024-02-01", "2024-02-01")]);
    let grid = MonthGrid::build(ymd(2024, 2, 1), WeekStart::Sunday);
    let rows = grid.annotate(&index, ymd(2024, 2, 1));
    // 2024-02-01 is a Thursday.
    assert!(rows[0][0..4].iter().all(|c| c.is_none()));
    let cell = rows[0][4].as_ref().unwrap();
    assert_eq!(cell.day, 1);
    assert!(cell.is_today);
    assert_eq!(cell.weekday, DayOfWeek::Thu);
    assert_eq!(cell.aggregate.unwrap().count, 1);
    let next = rows[0][5].as_ref().unwrap();
    assert!(!next.is_today);
    assert!(next.aggregate.is_none());
}

#[test]
fn is_today_requires_same_month_and_year() {
    let grid = MonthGrid::build(ymd(2024, 2, 1), WeekStart::Sunday);
    assert!(grid.is_today(5, ymd(2024, 2, 5)));
    assert!(!grid.is_today(5, ymd(2024, 3, 5)));
    assert!(!grid.is_today(5, ymd(2023, 2, 5)));
}
