//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables use the `AIRAC` prefix and nested values are
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use airac::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Printing cycles as {}", config.output.format);
//! ```

mod error;
mod log;
mod output;

pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use output::{OutputConfig, OutputFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, JSON output)
    #[serde(default)]
    pub log: LogConfig,

    /// Output configuration (short, long or JSON)
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `AIRAC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AIRAC__LOG__LEVEL=debug` -> `log.level = "debug"`
    /// - `AIRAC__LOG__JSON=true` -> `log.json = true`
    /// - `AIRAC__OUTPUT__FORMAT=short` -> `output.format = Short`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AIRAC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.log.validate()?;
        Ok(())
    }
}
