//! Calendar module - local calendar-day arithmetic.
//!
//! # Components
//!
//! - `date` - Strict `YYYY-MM-DD` parsing/formatting, Sunday-anchored weeks
//! - `window` - `DateWindow`, the inclusive range every projection runs over

mod date;
mod window;

pub use date::{
    date_from_timestamp_millis, day_of_month, end_of_week, format_local_date, parse_local_date,
    start_of_week, weekday_index, DATE_FORMAT,
};
pub use window::DateWindow;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while turning raw input into calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid date format '{input}', expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    #[error("Invalid date: instant {millis}ms is out of range")]
    InvalidDate { millis: i64 },
}

impl CalendarError {
    fn invalid_format(input: &str) -> Self {
        CalendarError::InvalidDateFormat {
            input: input.to_string(),
        }
    }
}

impl From<CalendarError> for DomainError {
    fn from(err: CalendarError) -> Self {
        let code = match &err {
            CalendarError::InvalidDateFormat { .. } => ErrorCode::InvalidDateFormat,
            CalendarError::InvalidDate { .. } => ErrorCode::InvalidDate,
        };
        DomainError::new(code, err.to_string())
    }
}
