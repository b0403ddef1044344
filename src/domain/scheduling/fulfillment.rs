//! Weekly fulfillment tracker.

use chrono::NaiveDate;

use crate::domain::calendar::DateWindow;
use crate::domain::foundation::SupplierId;
use crate::domain::order::OrderBook;

/// True iff the supplier has any order, regardless of status, dated within
/// `week_start..=week_end`.
///
/// Only meaningful for `WeeklyUntilFulfilled` suppliers.
pub fn has_fulfilled_week(
    supplier_id: SupplierId,
    week_start: NaiveDate,
    week_end: NaiveDate,
    orders: &OrderBook,
) -> bool {
    orders.any_in(supplier_id, &DateWindow::new(week_start, week_end))
}
