//! In-memory repository adapters.
//!
//! Back the binary's seeded mode and the integration tests. Neither adapter
//! persists anything across process restarts.

mod order_repository;
mod seed;
mod supplier_repository;

pub use order_repository::InMemoryOrderRepository;
pub use seed::{SeedData, SeedError};
pub use supplier_repository::InMemorySupplierRepository;
