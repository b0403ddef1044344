//! Sequence detector - collapses a window's nominal order days into one run.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::DateWindow;
use crate::domain::supplier::{is_scheduled_day, Supplier};

/// First-to-last span of nominal order days inside a window.
///
/// Gaps between the two ends are part of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ScheduledRun {
    /// Inclusive length in days.
    pub fn duration_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }
}

/// Finds the run of nominal order days between `window_start` and
/// `window_end` inclusive, or `None` if no day in that range is scheduled.
///
/// The run never extends past the given bounds.
pub fn find_scheduled_run(
    supplier: &Supplier,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Option<ScheduledRun> {
    let mut scheduled = DateWindow::new(window_start, window_end)
        .days()
        .filter(|d| is_scheduled_day(supplier, *d));

    let start = scheduled.next()?;
    let end = scheduled.last().unwrap_or(start);
    Some(ScheduledRun { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SupplierId;
    use crate::domain::supplier::ReminderPolicy;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly(days: &[u8]) -> Supplier {
        Supplier::by_weekday(
            SupplierId::new(),
            "Bakery",
            days.iter().copied(),
            ReminderPolicy::WeeklyUntilFulfilled,
        )
        .unwrap()
    }

    #[test]
    fn run_spans_first_to_last_scheduled_day() {
        // Mon 2024-03-04 and Fri 2024-03-08
        let s = weekly(&[1, 5]);
        let run = find_scheduled_run(&s, date(2024, 3, 3), date(2024, 3, 9)).unwrap();
        assert_eq!(run.start, date(2024, 3, 4));
        assert_eq!(run.end, date(2024, 3, 8));
        assert_eq!(run.duration_days(), 5);
    }

    #[test]
    fn single_scheduled_day_is_a_one_day_run() {
        let s = weekly(&[3]);
        let run = find_scheduled_run(&s, date(2024, 3, 3), date(2024, 3, 9)).unwrap();
        assert_eq!(run.start, run.end);
        assert_eq!(run.duration_days(), 1);
    }

    #[test]
    fn run_is_clipped_to_the_window() {
        let s = weekly(&[1, 3, 5]);
        let run = find_scheduled_run(&s, date(2024, 3, 5), date(2024, 3, 7)).unwrap();
        assert_eq!(run.start, date(2024, 3, 6));
        assert_eq!(run.end, date(2024, 3, 6));
    }

    #[test]
    fn no_scheduled_day_yields_none() {
        let s = weekly(&[0, 6]);
        assert!(find_scheduled_run(&s, date(2024, 3, 4), date(2024, 3, 8)).is_none());
    }

    #[test]
    fn empty_schedule_yields_none() {
        let s = weekly(&[]);
        assert!(find_scheduled_run(&s, date(2024, 3, 3), date(2024, 3, 9)).is_none());
    }
}
