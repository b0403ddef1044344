//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a TOML file) using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `SUPPLIER_ORDERS` prefix and nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use supplier_orders::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod scheduling;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scheduling::{InitialView, SchedulingConfig};

use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "SUPPLIER_ORDERS";

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scheduling configuration (initial calendar view)
    #[serde(default)]
    pub scheduling: SchedulingConfig,

    /// JSON file with `suppliers` and `orders` to seed the in-memory repositories
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `SUPPLIER_ORDERS__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `SUPPLIER_ORDERS__SCHEDULING__INITIAL_VIEW=month` -> `scheduling.initial_view = month`
    /// - `SUPPLIER_ORDERS__DATA_FILE=seed.json` -> `data_file = "seed.json"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format is inferred from the file extension.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter does not parse or the data
    /// file does not exist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        if let Some(path) = &self.data_file {
            if !path.exists() {
                return Err(ValidationError::DataFileMissing(path.display().to_string()));
            }
        }
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
