//! SaveOrderHandler - Command handler for creating or replacing an order.
//!
//! Orders are keyed by supplier and day. A successful save always asks the
//! projection store to refetch so the calendar and due-today list reflect it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::store::ProjectionStore;
use crate::domain::calendar::{format_local_date, parse_local_date};
use crate::domain::foundation::{DomainError, OrderId, SupplierId, ValidationError};
use crate::domain::order::{Order, OrderLine, OrderRecord, OrderStatus};
use crate::ports::OrderRepository;

/// Command to save an order for a supplier on a day.
#[derive(Debug, Clone)]
pub struct SaveOrderCommand {
    /// Existing order id, if the order was loaded before editing.
    pub id: Option<OrderId>,
    pub supplier_id: SupplierId,
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub notes: Option<String>,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveOrderResult {
    pub order: Order,
    /// False when the save went through but the refetch afterwards failed.
    pub refreshed: bool,
}

/// Handler for saving orders.
pub struct SaveOrderHandler {
    repository: Arc<dyn OrderRepository>,
    store: Arc<ProjectionStore>,
}

impl SaveOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>, store: Arc<ProjectionStore>) -> Self {
        Self { repository, store }
    }

    pub async fn handle(&self, cmd: SaveOrderCommand) -> Result<SaveOrderResult, DomainError> {
        // 1. Validate before touching the repository
        let date = parse_local_date(&cmd.date)?;
        validate_lines(&cmd.lines)?;

        // 2. Persist under the canonical date
        let saved = self
            .repository
            .save(OrderRecord {
                id: cmd.id,
                supplier_id: cmd.supplier_id,
                date: format_local_date(date),
                status: cmd.status,
                lines: cmd.lines,
                notes: cmd.notes,
            })
            .await?;
        let order = Order::try_from(saved)?;
        info!(
            supplier_id = %order.supplier_id,
            date = %order.date,
            status = %order.status,
            "order saved"
        );

        // 3. Refetch projections
        let refreshed = match self.store.order_saved().await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "order saved but projections could not be refreshed");
                false
            }
        };

        Ok(SaveOrderResult { order, refreshed })
    }
}

fn validate_lines(lines: &[OrderLine]) -> Result<(), ValidationError> {
    for line in lines {
        if line.product.trim().is_empty() {
            return Err(ValidationError::empty_field("product"));
        }
        if line.quantity == 0 {
            return Err(ValidationError::out_of_range("quantity", 1, i32::MAX, 0));
        }
    }
    Ok(())
}
