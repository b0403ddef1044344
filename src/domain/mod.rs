//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `calendar` - Local calendar-day parsing, weeks and date windows
//! - `supplier` - Suppliers and the schedule predicate
//! - `order` - Orders and the natural-key `OrderBook`
//! - `scheduling` - Pure obligation projection and row layout

pub mod calendar;
pub mod foundation;
pub mod order;
pub mod scheduling;
pub mod supplier;
