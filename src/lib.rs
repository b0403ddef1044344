//! Supplier Orders - order scheduling and calendar projection engine.
//!
//! Turns supplier schedules and saved orders into the obligations an admin
//! calendar shows: which supplier needs an order on which day, and in what
//! state that order is.
//!
//! - `domain` - calendar arithmetic, suppliers, orders and the pure projector
//! - `ports` / `adapters` - repository and clock seams with in-memory backends
//! - `application` - the projection store and order handlers
//! - `config` / `logging` - ambient setup for the binary

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
