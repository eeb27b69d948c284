use super::{
    chrono::{NaiveDateExt, WeekdayExt},
    enums::valid_csv,
    string::ToDashSeparators,
};
use crate::core::types::DayOfWeek;
use chrono::{NaiveDate, Weekday};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekday_ext_maps_to_domain_enum() {
    let pairs = [
        (Weekday::Mon, DayOfWeek::Mon),
        (Weekday::Tue, DayOfWeek::Tue),
        (Weekday::Wed, DayOfWeek::Wed),
        (Weekday::Thu, DayOfWeek::Thu),
        (Weekday::Fri, DayOfWeek::Fri),
        (Weekday::Sat, DayOfWeek::Sat),
        (Weekday::Sun, DayOfWeek::Sun),
    ];
    for (weekday, expected) in pairs {
        assert_eq!(weekday.to_day_of_week(), expected);
        assert_eq!(expected.to_chrono(), weekday);
    }
}

#[test]
fn valid_csv_lists_enum_variants_as_strings() {
    let csv = valid_csv::<DayOfWeek>();
    assert!(csv.contains("MON"));
    assert!(csv.contains("SUN"));
    assert!(csv.contains(","));
}

#[test]
fn to_dash_separators_replaces_and_trims() {
    let s = " 2025/01/02 ";
    assert_eq!(s.to_dash_separators(), "2025-01-02");

    let owned = "a/b/c".to_string();
    assert_eq!(owned.to_dash_separators(), "a-b-c");
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(ymd(2024, 2, 10).days_in_month(), 29);
    assert_eq!(ymd(2023, 2, 10).days_in_month(), 28);
    assert_eq!(ymd(2024, 12, 31).days_in_month(), 31);
    assert_eq!(ymd(2024, 4, 1).days_in_month(), 30);
}

#[test]
fn shift_months_keeps_day_when_it_exists() {
    assert_eq!(ymd(2024, 3, 15).shift_months_rolling(1), ymd(2024, 4, 15));
    assert_eq!(ymd(2024, 1, 15).shift_months_rolling(-1), ymd(2023, 12, 15));
    assert_eq!(ymd(2024, 12, 1).shift_months_rolling(1), ymd(2025, 1, 1));
}

#[test]
fn shift_months_rolls_forward_on_overflow() {
    assert_eq!(ymd(2024, 1, 31).shift_months_rolling(1), ymd(2024, 3, 2));
    assert_eq!(ymd(2023, 1, 31).shift_months_rolling(1), ymd(2023, 3, 3));
    assert_eq!(ymd(2024, 3, 31).shift_months_rolling(-1), ymd(2024, 3, 2));
}
