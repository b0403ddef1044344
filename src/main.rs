//! supplier-orders binary.
//!
//! Loads configuration, seeds the in-memory repositories, refreshes the
//! projection store once and prints the resulting snapshot as JSON.
//!
//! An optional first argument names a TOML config file.

use std::path::PathBuf;
use std::sync::Arc;

use supplier_orders::adapters::{SeedData, SystemClock};
use supplier_orders::application::ProjectionStore;
use supplier_orders::config::AppConfig;
use supplier_orders::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(&PathBuf::from(path))?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    logging::init(&config.logging);

    let seed = match &config.data_file {
        Some(path) => SeedData::from_path(path)?,
        None => {
            tracing::warn!("no data file configured, starting empty");
            SeedData::default()
        }
    };
    let (suppliers, orders) = seed.into_repositories();

    let store = ProjectionStore::new(
        Arc::new(suppliers),
        Arc::new(orders),
        Arc::new(SystemClock),
        &config.scheduling,
    );
    store.refresh_suppliers().await?;

    let snapshot = store.snapshot();
    println!("{}", serde_json::to_string_pretty(&*snapshot)?);
    Ok(())
}
