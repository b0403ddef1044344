//! Order domain module.
//!
//! Orders are persisted elsewhere. The engine reads them through an
//! `OrderBook`, which indexes them by `(supplier_id, date)`.

mod book;
mod entity;

pub use book::OrderBook;
pub use entity::{Order, OrderLine, OrderRecord, OrderStatus};
