//! Inclusive date windows used as projection ranges.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{end_of_week, start_of_week};

/// Inclusive range of calendar days. Always normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WindowBounds")]
pub struct DateWindow {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowBounds {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<WindowBounds> for DateWindow {
    fn from(bounds: WindowBounds) -> Self {
        DateWindow::new(bounds.start_date, bounds.end_date)
    }
}

impl DateWindow {
    /// Creates a window, swapping the bounds if they arrive reversed.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start_date: a, end_date: b }
        } else {
            Self { start_date: b, end_date: a }
        }
    }

    /// A window covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self { start_date: date, end_date: date }
    }

    /// The Sunday-to-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        Self {
            start_date: start_of_week(date),
            end_date: end_of_week(date),
        }
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date - Duration::days(i64::from(date.day0()));
        let last_day = (28..=31)
            .rev()
            .find(|d| NaiveDate::from_ymd_opt(date.year(), date.month(), *d).is_some())
            .unwrap_or(28);
        Self {
            start_date: start,
            end_date: start + Duration::days(i64::from(last_day) - 1),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end(&self) -> NaiveDate {
        self.end_date
    }

    /// True if `date` lies within the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered, bounds included.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Iterates every day of the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let len = self.len_days() as usize;
        self.start_date.iter_days().take(len)
    }

    /// Overlap of two windows, or `None` when they are disjoint.
    pub fn intersect(&self, other: &DateWindow) -> Option<DateWindow> {
        let start = self.start_date.max(other.start_date);
        let end = self.end_date.min(other.end_date);
        (start <= end).then_some(DateWindow {
            start_date: start,
            end_date: end,
        })
    }

    /// Grows the window outwards to whole Sunday-to-Saturday weeks.
    pub fn expand_to_weeks(&self) -> DateWindow {
        DateWindow {
            start_date: start_of_week(self.start_date),
            end_date: end_of_week(self.end_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_normalizes_reversed_bounds() {
        let w = DateWindow::new(date(2024, 3, 9), date(2024, 3, 3));
        assert_eq!(w.start(), date(2024, 3, 3));
        assert_eq!(w.end(), date(2024, 3, 9));
    }

    #[test]
    fn days_are_inclusive_and_ascending() {
        let w = DateWindow::new(date(2024, 2, 28), date(2024, 3, 1));
        let days: Vec<_> = w.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
        assert_eq!(w.len_days(), 3);
    }

    #[test]
    fn single_day_window_has_one_day() {
        let w = DateWindow::single_day(date(2024, 3, 6));
        assert_eq!(w.days().count(), 1);
        assert!(w.contains(date(2024, 3, 6)));
        assert!(!w.contains(date(2024, 3, 7)));
    }

    #[test]
    fn week_of_spans_sunday_to_saturday() {
        let w = DateWindow::week_of(date(2024, 3, 6));
        assert_eq!(w.start(), date(2024, 3, 3));
        assert_eq!(w.end(), date(2024, 3, 9));
        assert_eq!(w.len_days(), 7);
    }

    #[test]
    fn month_of_handles_leap_february() {
        let w = DateWindow::month_of(date(2024, 2, 14));
        assert_eq!(w.start(), date(2024, 2, 1));
        assert_eq!(w.end(), date(2024, 2, 29));
    }

    #[test]
    fn month_of_handles_december() {
        let w = DateWindow::month_of(date(2023, 12, 31));
        assert_eq!(w.start(), date(2023, 12, 1));
        assert_eq!(w.end(), date(2023, 12, 31));
    }

    #[test]
    fn intersect_clips_to_overlap() {
        let week = DateWindow::week_of(date(2024, 3, 6));
        let window = DateWindow::new(date(2024, 3, 5), date(2024, 3, 20));
        let clipped = week.intersect(&window).unwrap();
        assert_eq!(clipped, DateWindow::new(date(2024, 3, 5), date(2024, 3, 9)));
    }

    #[test]
    fn intersect_of_disjoint_windows_is_none() {
        let a = DateWindow::new(date(2024, 3, 1), date(2024, 3, 2));
        let b = DateWindow::new(date(2024, 3, 4), date(2024, 3, 5));
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn expand_to_weeks_reaches_week_boundaries() {
        let w = DateWindow::new(date(2024, 3, 6), date(2024, 3, 12)).expand_to_weeks();
        assert_eq!(w.start(), date(2024, 3, 3));
        assert_eq!(w.end(), date(2024, 3, 16));
    }

    #[test]
    fn serializes_with_camel_case_bounds() {
        let w = DateWindow::new(date(2024, 3, 3), date(2024, 3, 9));
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"startDate":"2024-03-03","endDate":"2024-03-09"}"#);
    }

    #[test]
    fn deserialization_normalizes_bounds() {
        let w: DateWindow =
            serde_json::from_str(r#"{"startDate":"2024-03-09","endDate":"2024-03-03"}"#).unwrap();
        assert_eq!(w.start(), date(2024, 3, 3));
    }
}
