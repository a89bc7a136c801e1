//! CLI error types.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the command-line user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An explicitly requested file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be loaded or is inconsistent
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Contract parameters failed validation
    #[error("Invalid contract: {0}")]
    Instrument(#[from] InstrumentError),

    /// The engine could not produce a usable result
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// I/O failure while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
