//! Local calendar-day helpers.
//!
//! Every date handled by the engine is a local calendar day. Values are kept as
//! `NaiveDate` so no comparison is ever shifted through UTC.

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone};

use super::CalendarError;

/// Canonical wire format for calendar days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` string into a local calendar day.
///
/// # Errors
///
/// - `InvalidDateFormat` if the string is not exactly ten characters of the
///   form `YYYY-MM-DD`, or does not name a real calendar day (`2024-02-30`).
pub fn parse_local_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(CalendarError::invalid_format(s));
    }

    let year: i32 = s[0..4].parse().map_err(|_| CalendarError::invalid_format(s))?;
    let month: u32 = s[5..7].parse().map_err(|_| CalendarError::invalid_format(s))?;
    let day: u32 = s[8..10].parse().map_err(|_| CalendarError::invalid_format(s))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CalendarError::invalid_format(s))
}

/// Formats a calendar day as `YYYY-MM-DD`.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Converts an epoch-millisecond instant to the local calendar day it falls on.
///
/// # Errors
///
/// - `InvalidDate` if the instant is outside the representable range.
pub fn date_from_timestamp_millis(millis: i64) -> Result<NaiveDate, CalendarError> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive())
        .ok_or(CalendarError::InvalidDate { millis })
}

/// Returns the Sunday that opens the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Returns the Saturday that closes the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Day of week with Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Day of month, 1 through 31.
pub fn day_of_month(date: NaiveDate) -> u8 {
    date.day() as u8
}
