//! Projection store - owns calendar state and publishes snapshots.

mod projection_store;
mod snapshot;

pub use projection_store::{ProjectionStore, RefreshOutcome, StoreError};
pub use snapshot::{ProjectionSnapshot, StoreStatus};
