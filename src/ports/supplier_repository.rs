//! Supplier repository port (read side).
//!
//! Suppliers are maintained by CRUD screens outside this crate. The
//! scheduling engine only ever lists them.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::supplier::Supplier;

/// Read-only port for supplier lookups.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Lists suppliers that are neither inactive nor soft-deleted.
    ///
    /// The projector filters on `is_schedulable` again before using them.
    ///
    /// # Errors
    ///
    /// - `RepositoryUnavailable` when the backing store cannot be reached
    async fn list_active_suppliers(&self) -> Result<Vec<Supplier>, DomainError>;
}
