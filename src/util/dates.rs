//! Calendar helpers for forms and the month picker.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Current month (1-based) and year.
pub fn current_month_year() -> (u32, i32) {
    let now = Utc::now();
    (now.month(), now.year())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today in the format an `<input type="date">` expects.
pub fn today_input_value() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// `MM/DD/YYYY`, the format used in tables and goal cards.
pub fn format_mdy(date: &DateTime<Utc>) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// English month name for a 1-based month number, empty when out of
/// range.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// The month before `(month, year)`, wrapping into December.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month <= 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// The month after `(month, year)`, wrapping into January.
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month >= 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}
