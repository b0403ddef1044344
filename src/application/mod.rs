//! Application layer - the projection store plus command and query handlers.
//!
//! The store owns calendar state and republishes it whenever data changes.
//! Handlers orchestrate writes and reads through the ports and tell the store
//! when it has to refetch.

pub mod handlers;
pub mod store;

pub use handlers::{
    ListDraftOrdersHandler, ListDraftOrdersQuery, SaveOrderCommand, SaveOrderHandler,
    SaveOrderResult,
};
pub use store::{ProjectionSnapshot, ProjectionStore, RefreshOutcome, StoreError, StoreStatus};
