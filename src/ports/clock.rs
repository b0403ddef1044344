//! Clock port - the source of "today".
//!
//! Projections never read the system clock themselves. The store asks a
//! `Clock` once per recompute and passes the day down explicitly.

use chrono::NaiveDate;

/// Supplies the current local calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
