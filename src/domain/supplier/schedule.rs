//! Schedule predicate - is a date a nominal order day for a supplier?

use chrono::NaiveDate;

use super::{ScheduleMode, Supplier};
use crate::domain::calendar::{day_of_month, weekday_index};

/// True iff `date` is a nominal order day under the supplier's schedule.
///
/// Never fails: an unset mode or an empty day set simply yields `false`.
pub fn is_scheduled_day(supplier: &Supplier, date: NaiveDate) -> bool {
    match supplier.schedule_mode {
        Some(ScheduleMode::ByWeekday) => supplier.weekdays.contains(&weekday_index(date)),
        Some(ScheduleMode::ByMonthDay) => supplier.month_days.contains(&day_of_month(date)),
        None => false,
    }
}
