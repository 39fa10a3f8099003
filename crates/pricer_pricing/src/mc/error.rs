//! Error types for the Monte Carlo pricing strategy.
//!
//! Contract and market problems are reported as
//! `pricer_core::types::PricingError`; this module only covers simulation
//! settings rejected at construction time.

use std::fmt;

use super::config::{MAX_PATHS, MIN_PATHS};

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `MIN_PATHS..=MAX_PATHS`.
    InvalidPathCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [{}, {}]",
                    count, MIN_PATHS, MAX_PATHS
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(1);
        assert_eq!(
            err.to_string(),
            "Invalid path count 1: must be in range [4, 10000000]"
        );

        let _: &dyn std::error::Error = &err;
    }
}
