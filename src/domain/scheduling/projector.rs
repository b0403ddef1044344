//! Obligation projector - derives who owes an order, and in what state.
//!
//! # Precedence
//!
//! An existing order on a day always wins: it produces an order-backed
//! obligation and replaces any reminder the schedule would have produced.
//!
//! # Reminder policies
//!
//! - `EachOccurrence` - one single-day reminder per nominal order day
//! - `WeeklyUntilFulfilled` - one reminder per Sunday-to-Saturday week, silenced
//!   by any order that week. In range mode the reminder covers the run of
//!   nominal days inside the week and the window.
//!
//! Both entry points take `today` explicitly so results depend only on inputs.

use chrono::NaiveDate;

use super::{find_scheduled_run, has_fulfilled_week, Obligation};
use crate::domain::calendar::DateWindow;
use crate::domain::order::OrderBook;
use crate::domain::supplier::{is_scheduled_day, ReminderPolicy, Supplier};

/// Projects every obligation inside `window`, for calendar grids.
///
/// Inactive and soft-deleted suppliers are dropped before projection. Output is
/// ordered by supplier (input order), then by start date.
pub fn project_range(
    suppliers: &[Supplier],
    orders: &OrderBook,
    window: &DateWindow,
    today: NaiveDate,
) -> Vec<Obligation> {
    let mut obligations = Vec::new();
    for supplier in suppliers.iter().filter(|s| s.is_schedulable()) {
        project_supplier_range(supplier, orders, window, today, &mut obligations);
    }
    obligations
}

fn project_supplier_range(
    supplier: &Supplier,
    orders: &OrderBook,
    window: &DateWindow,
    today: NaiveDate,
    out: &mut Vec<Obligation>,
) {
    let mut cursor = Some(window.start());

    while let Some(day) = cursor.filter(|d| *d <= window.end()) {
        cursor = day.succ_opt();

        if let Some(order) = orders.get(supplier.id, day) {
            out.push(Obligation::from_order(supplier, order));
            continue;
        }
        if !is_scheduled_day(supplier, day) {
            continue;
        }

        match supplier.reminder_policy {
            ReminderPolicy::EachOccurrence => {
                out.push(Obligation::reminder(supplier, day, today));
            }
            ReminderPolicy::WeeklyUntilFulfilled => {
                let week = DateWindow::week_of(day);
                if has_fulfilled_week(supplier.id, week.start(), week.end(), orders) {
                    continue;
                }
                let Some(span) = week.intersect(window) else {
                    continue;
                };
                let Some(run) = find_scheduled_run(supplier, span.start(), span.end()) else {
                    continue;
                };
                if run.start == day {
                    out.push(Obligation::sequence(supplier, run, today));
                }
                cursor = run.end.succ_opt();
            }
        }
    }
}

/// Projects the obligations due on a single `date`, for "due today" lists.
///
/// Uses the same precedence and policies as [`project_range`], but weekly
/// reminders are dated exactly `date` rather than spanning their run.
/// Obligations backed by a sent order are left out.
pub fn project_single_day(
    suppliers: &[Supplier],
    orders: &OrderBook,
    date: NaiveDate,
    today: NaiveDate,
) -> Vec<Obligation> {
    suppliers
        .iter()
        .filter(|s| s.is_schedulable())
        .filter_map(|s| single_day_obligation(s, orders, date, today))
        .filter(|o| !o.source_status.is_sent())
        .collect()
}

fn single_day_obligation(
    supplier: &Supplier,
    orders: &OrderBook,
    date: NaiveDate,
    today: NaiveDate,
) -> Option<Obligation> {
    if let Some(order) = orders.get(supplier.id, date) {
        return Some(Obligation::from_order(supplier, order));
    }
    if !is_scheduled_day(supplier, date) {
        return None;
    }

    match supplier.reminder_policy {
        ReminderPolicy::EachOccurrence => Some(Obligation::reminder(supplier, date, today)),
        ReminderPolicy::WeeklyUntilFulfilled => {
            let week = DateWindow::week_of(date);
            if has_fulfilled_week(supplier.id, week.start(), week.end(), orders) {
                return None;
            }
            find_scheduled_run(supplier, date, date).map(|run| Obligation::sequence(supplier, run, today))
        }
    }
}

#[cfg(test)]
#[path = "projector_test.rs"]
mod projector_test;
