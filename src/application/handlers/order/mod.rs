//! Order command and query handlers.

mod list_draft_orders;
mod save_order;

pub use list_draft_orders::{ListDraftOrdersHandler, ListDraftOrdersQuery};
pub use save_order::{SaveOrderCommand, SaveOrderHandler, SaveOrderResult};
