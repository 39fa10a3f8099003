//! CLI error types
//!
//! Every library error converts into [`CliError`] so that commands can use
//! `?` throughout and `main` reports a single message.

use thiserror::Error;

use pricer_core::types::{DateError, PricingError};

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Contract, market or grid input rejected by the engine
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// Malformed date
    #[error("{0}")]
    Date(#[from] DateError),

    /// Invalid configuration file, environment or flags
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// JSON rendering failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
