//! Supplier domain module.
//!
//! Suppliers are owned by an external repository; the engine only reads
//! their status, recurring schedule and reminder policy.

mod entity;
mod schedule;

pub use entity::{ReminderPolicy, ScheduleMode, Supplier, SupplierStatus};
pub use schedule::is_scheduled_day;
