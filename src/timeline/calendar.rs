//! Proleptic Gregorian helpers shared by the year, goal and life timelines.

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1 = January).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month out of range: {month}"),
    }
}

/// Weekday of the first of `month`, with Sunday as 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .weekday()
        .num_days_from_sunday()
}

/// 1-based day-of-year for a calendar day.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (1..month).map(|m| days_in_month(year, m)).sum::<u32>() + day
}

pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREV[(month as usize).saturating_sub(1) % 12]
}

pub fn year_start(year: i32) -> NaiveDate {
    first_of_month(year, 1)
}

/// Signed whole-day difference `to - from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid calendar month {year}-{month}"))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/calendar.rs"]
mod tests;
