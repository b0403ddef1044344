//! ListDraftOrdersHandler - Query handler for orders still in draft.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SupplierId};
use crate::domain::order::{Order, OrderBook, OrderStatus};
use crate::ports::OrderRepository;

/// Query for draft orders, optionally limited to one supplier.
#[derive(Debug, Clone, Default)]
pub struct ListDraftOrdersQuery {
    pub supplier_id: Option<SupplierId>,
}

/// Handler for listing draft orders.
///
/// Records with unparseable dates are skipped, as everywhere else.
pub struct ListDraftOrdersHandler {
    repository: Arc<dyn OrderRepository>,
}

impl ListDraftOrdersHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Returns drafts ordered by date, then supplier.
    pub async fn handle(&self, query: ListDraftOrdersQuery) -> Result<Vec<Order>, DomainError> {
        let records = self
            .repository
            .find_orders_by_status(&[OrderStatus::Draft])
            .await?;

        let book = OrderBook::from_records(records);
        let mut drafts: Vec<Order> = book
            .iter()
            .filter(|o| o.status == OrderStatus::Draft)
            .filter(|o| query.supplier_id.map_or(true, |id| o.supplier_id == id))
            .cloned()
            .collect();
        drafts.sort_by_key(|o| (o.date, o.supplier_id));
        Ok(drafts)
    }
}
