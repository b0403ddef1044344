//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `SupplierRepository` - Lists active suppliers
//! - `OrderRepository` - Range and status reads, upsert by natural key
//!
//! ## Runtime Ports
//!
//! - `Clock` - Current local calendar day

mod clock;
mod order_repository;
mod supplier_repository;

pub use clock::Clock;
pub use order_repository::OrderRepository;
pub use supplier_repository::SupplierRepository;
