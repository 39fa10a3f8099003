//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for the
//! Monte Carlo pricing strategy.

use super::error::ConfigError;

/// Minimum number of simulation paths (two antithetic samples).
pub const MIN_PATHS: usize = 4;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Path count used when none is specified.
pub const DEFAULT_PATHS: usize = 100_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_samples(), 25_000);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of normal draws (paths).
    n_paths: usize,
    /// Seed of the whole run; chunk streams derive from it.
    seed: u64,
    /// Pair each draw with its negation.
    antithetic: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: 0,
            antithetic: true,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether antithetic variates are used.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Number of independent samples behind the estimate.
    ///
    /// With antithetic variates each sample averages a `Z`/`−Z` pair, so
    /// `n_paths` draws give `ceil(n_paths / 2)` samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        if self.antithetic {
            self.n_paths.div_ceil(2)
        } else {
            self.n_paths
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if `n_paths` is outside
    /// `MIN_PATHS..=MAX_PATHS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PATHS..=MAX_PATHS).contains(&self.n_paths) {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take the defaults: [`DEFAULT_PATHS`] paths, seed 0,
/// antithetic variates on.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    antithetic: Option<bool>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = Some(antithetic);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if the path count is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let defaults = MonteCarloConfig::default();
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            seed: self.seed.unwrap_or(defaults.seed),
            antithetic: self.antithetic.unwrap_or(defaults.antithetic),
        };

        config.validate()?;
        Ok(config)
    }
}
