use chrono::{NaiveDate, TimeZone, Utc};

use super::*;

// ============================================================================
// Month names
// ============================================================================

#[test]
fn month_names_are_one_based() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
}

#[test]
fn out_of_range_months_are_empty() {
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}

// ============================================================================
// Month stepping
// ============================================================================

#[test]
fn previous_month_wraps_into_december() {
    assert_eq!(previous_month(1, 2024), (12, 2023));
    assert_eq!(previous_month(6, 2024), (5, 2024));
}

#[test]
fn next_month_wraps_into_january() {
    assert_eq!(next_month(12, 2024), (1, 2025));
    assert_eq!(next_month(6, 2024), (7, 2024));
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn mdy_format_pads_with_zeros() {
    let date = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
    assert_eq!(format_mdy(&date), "05/03/2024");
}

#[test]
fn today_input_value_round_trips_through_the_input_format() {
    let value = today_input_value();
    let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d");
    assert_eq!(parsed, Ok(today()));
}
