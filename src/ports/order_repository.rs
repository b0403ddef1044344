//! Order repository port.
//!
//! Orders come back as `OrderRecord`s with their date still in wire form, so
//! that the engine decides how to treat malformed records.
//!
//! # Design
//!
//! - **Range reads**: calendar views fetch by supplier set and date range
//! - **Status reads**: draft lists fetch by status regardless of date
//! - **Upsert**: `(supplier_id, date)` is the natural key for saves

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SupplierId};
use crate::domain::order::{OrderRecord, OrderStatus};

/// Repository port for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Finds orders for the given suppliers dated within `start..=end`.
    ///
    /// An empty supplier list yields no orders.
    async fn find_orders_in_range(
        &self,
        supplier_ids: &[SupplierId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<OrderRecord>, DomainError>;

    /// Finds every order whose status is one of `statuses`.
    async fn find_orders_by_status(
        &self,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, DomainError>;

    /// Saves an order, replacing any order with the same supplier and date.
    ///
    /// Assigns an id when the record has none and returns the stored record.
    ///
    /// # Errors
    ///
    /// - `InvalidDateFormat` if the record date is not `YYYY-MM-DD`
    /// - `RepositoryUnavailable` on persistence failure
    async fn save(&self, record: OrderRecord) -> Result<OrderRecord, DomainError>;
}
