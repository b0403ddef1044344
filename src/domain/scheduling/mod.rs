//! Scheduling Module - order obligations derived from schedules and orders.
//!
//! # Components
//!
//! - `Obligation` - Derived record of an order owed on a day or span
//! - `has_fulfilled_week` - Weekly fulfillment tracker
//! - `find_scheduled_run` - Sequence detector for weekly reminders
//! - `project_range` / `project_single_day` - The obligation projector
//! - `assign_rows` - Date-independent row layout
//!
//! All functions are pure. They take suppliers, an `OrderBook` and an explicit
//! `today`, and return fresh obligations every call.

mod fulfillment;
mod layout;
mod obligation;
mod projector;
mod sequence;

pub use fulfillment::has_fulfilled_week;
pub use layout::assign_rows;
pub use obligation::{summarize, DisplayState, Obligation, ObligationKind, ObligationSummary};
pub use projector::{project_range, project_single_day};
pub use sequence::{find_scheduled_run, ScheduledRun};
