//! OrderBook - orders indexed by their natural key.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

use super::{Order, OrderRecord};
use crate::domain::calendar::DateWindow;
use crate::domain::foundation::SupplierId;

/// Known orders keyed by `(supplier_id, date)`.
///
/// Keys sort by supplier first, so every per-supplier date range is a
/// contiguous slice of the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: BTreeMap<(SupplierId, NaiveDate), Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from already-parsed orders.
    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut book = Self::new();
        for order in orders {
            book.insert(order);
        }
        book
    }

    /// Builds a book from repository records.
    ///
    /// Records whose date does not parse are logged and skipped; one bad record
    /// never empties the whole book.
    pub fn from_records(records: impl IntoIterator<Item = OrderRecord>) -> Self {
        let mut book = Self::new();
        for record in records {
            let order_id = record.id;
            let supplier_id = record.supplier_id;
            match Order::try_from(record) {
                Ok(order) => {
                    book.insert(order);
                }
                Err(e) => {
                    warn!(
                        order_id = ?order_id,
                        supplier_id = %supplier_id,
                        error = %e,
                        "skipping order record with malformed date"
                    );
                }
            }
        }
        book
    }

    /// Inserts an order. Returns `false` and keeps the existing entry when the
    /// natural key is already taken.
    pub fn insert(&mut self, order: Order) -> bool {
        let key = order.key();
        if let Some(existing) = self.orders.get(&key) {
            warn!(
                supplier_id = %key.0,
                date = %key.1,
                kept = ?existing.id,
                dropped = ?order.id,
                "duplicate order for supplier and date"
            );
            return false;
        }
        self.orders.insert(key, order);
        true
    }

    /// The order for a supplier on a given day, if any.
    pub fn get(&self, supplier_id: SupplierId, date: NaiveDate) -> Option<&Order> {
        self.orders.get(&(supplier_id, date))
    }

    /// True if the supplier has any order, of any status, inside `window`.
    pub fn any_in(&self, supplier_id: SupplierId, window: &DateWindow) -> bool {
        self.orders
            .range((supplier_id, window.start())..=(supplier_id, window.end()))
            .next()
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders by supplier, then date.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }
}
