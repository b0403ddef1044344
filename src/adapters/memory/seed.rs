//! Seed data for the in-memory repositories.
//!
//! The file is JSON of the form `{ "suppliers": [...], "orders": [...] }`,
//! using the same camelCase field names the records serialize with. Orders
//! keep their raw date strings; malformed ones are skipped later, at
//! projection time.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::order::OrderRecord;
use crate::domain::supplier::Supplier;

use super::{InMemoryOrderRepository, InMemorySupplierRepository};

/// Errors raised while reading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Suppliers and orders loaded from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl SeedData {
    /// Reads and parses a seed file.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let mut seed: SeedData = serde_json::from_str(raw)?;
        seed.suppliers.retain(|supplier| match supplier.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(supplier_id = %supplier.id, error = %err, "skipping invalid supplier");
                false
            }
        });
        info!(
            suppliers = seed.suppliers.len(),
            orders = seed.orders.len(),
            "seed data loaded"
        );
        Ok(seed)
    }

    /// Builds repositories holding the seeded data.
    pub fn into_repositories(self) -> (InMemorySupplierRepository, InMemoryOrderRepository) {
        (
            InMemorySupplierRepository::with_suppliers(self.suppliers),
            InMemoryOrderRepository::with_records(self.orders),
        )
    }
}
