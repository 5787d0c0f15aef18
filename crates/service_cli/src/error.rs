//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `divergence` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A pricer, Greek or calculator rejected its inputs.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command-line value is unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An explicitly named file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
