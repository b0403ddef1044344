//! In-memory supplier repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::supplier::Supplier;
use crate::ports::SupplierRepository;

/// Supplier repository backed by a vector.
///
/// Used by the binary's seeded mode and by tests.
#[derive(Default)]
pub struct InMemorySupplierRepository {
    suppliers: RwLock<Vec<Supplier>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `suppliers`.
    pub fn with_suppliers(suppliers: Vec<Supplier>) -> Self {
        Self {
            suppliers: RwLock::new(suppliers),
        }
    }

    /// Inserts or replaces a supplier by id.
    pub fn upsert(&self, supplier: Supplier) -> Result<(), DomainError> {
        let mut suppliers = self.suppliers.write().map_err(|_| poisoned())?;
        match suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(existing) => *existing = supplier,
            None => suppliers.push(supplier),
        }
        Ok(())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "supplier store lock poisoned")
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn list_active_suppliers(&self) -> Result<Vec<Supplier>, DomainError> {
        let suppliers = self.suppliers.read().map_err(|_| poisoned())?;
        Ok(suppliers.iter().filter(|s| s.is_schedulable()).cloned().collect())
    }
}
