//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Log level cannot be empty")]
    EmptyLogLevel,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Unknown output format: {0} (expected short, long or json)")]
    UnknownOutputFormat(String),
}
