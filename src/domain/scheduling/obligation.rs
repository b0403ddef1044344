//! Obligation - a derived "this supplier owes an order" record.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::ScheduledRun;
use crate::domain::foundation::{OrderId, SupplierId};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::supplier::Supplier;

/// How an obligation is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// Nominal day (or run) entirely in the past with no order: missed.
    /// Also used for orders explicitly saved as empty.
    Empty,
    /// Due today, or a run that covers today.
    Today,
    /// Strictly after today.
    Future,
    /// Backed by a draft order.
    Draft,
    /// Backed by an order already sent.
    Sent,
}

impl DisplayState {
    /// State of a reminder for a single nominal day.
    pub fn for_day(date: NaiveDate, today: NaiveDate) -> Self {
        Self::for_span(date, date, today)
    }

    /// State of a reminder spanning `start..=end`.
    pub fn for_span(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if end < today {
            DisplayState::Empty
        } else if start > today {
            DisplayState::Future
        } else {
            DisplayState::Today
        }
    }
}

impl From<OrderStatus> for DisplayState {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Empty => DisplayState::Empty,
            OrderStatus::Draft => DisplayState::Draft,
            OrderStatus::Sent => DisplayState::Sent,
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayState::Empty => "Empty",
            DisplayState::Today => "Today",
            DisplayState::Future => "Future",
            DisplayState::Draft => "Draft",
            DisplayState::Sent => "Sent",
        };
        write!(f, "{}", s)
    }
}

/// Whether the obligation covers one day or a collapsed weekly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationKind {
    OneOff,
    Sequence,
}

/// A derived, never persisted, ordering obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub kind: ObligationKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive span in days.
    pub duration_days: u32,
    /// Status of the order on `start_date`, `Empty` when there is none.
    pub source_status: OrderStatus,
    pub display_state: DisplayState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Layout row, 1-based. Stays 1 until `assign_rows` runs.
    pub row: u32,
}

impl Obligation {
    /// Single-day obligation backed by an existing order.
    pub fn from_order(supplier: &Supplier, order: &Order) -> Self {
        Self {
            supplier_id: supplier.id,
            supplier_name: supplier.name.clone(),
            kind: ObligationKind::OneOff,
            start_date: order.date,
            end_date: order.date,
            duration_days: 1,
            source_status: order.status,
            display_state: order.status.into(),
            order_id: order.id,
            row: 1,
        }
    }

    /// Single-day reminder for a nominal order day with no order.
    pub fn reminder(supplier: &Supplier, date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            supplier_id: supplier.id,
            supplier_name: supplier.name.clone(),
            kind: ObligationKind::OneOff,
            start_date: date,
            end_date: date,
            duration_days: 1,
            source_status: OrderStatus::Empty,
            display_state: DisplayState::for_day(date, today),
            order_id: None,
            row: 1,
        }
    }

    /// Weekly reminder collapsed over a run of nominal order days.
    pub fn sequence(supplier: &Supplier, run: ScheduledRun, today: NaiveDate) -> Self {
        Self {
            supplier_id: supplier.id,
            supplier_name: supplier.name.clone(),
            kind: ObligationKind::Sequence,
            start_date: run.start,
            end_date: run.end,
            duration_days: run.duration_days(),
            source_status: OrderStatus::Empty,
            display_state: DisplayState::for_span(run.start, run.end, today),
            order_id: None,
            row: 1,
        }
    }

    /// True if `date` falls inside the obligation's span.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Obligation counts per display state, for badges and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationSummary {
    pub empty: usize,
    pub today: usize,
    pub future: usize,
    pub draft: usize,
    pub sent: usize,
}

impl ObligationSummary {
    pub fn total(&self) -> usize {
        self.empty + self.today + self.future + self.draft + self.sent
    }
}

/// Counts obligations by display state.
pub fn summarize(obligations: &[Obligation]) -> ObligationSummary {
    obligations
        .iter()
        .fold(ObligationSummary::default(), |mut acc, o| {
            match o.display_state {
                DisplayState::Empty => acc.empty += 1,
                DisplayState::Today => acc.today += 1,
                DisplayState::Future => acc.future += 1,
                DisplayState::Draft => acc.draft += 1,
                DisplayState::Sent => acc.sent += 1,
            }
            acc
        })
}
