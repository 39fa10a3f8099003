//! Monte Carlo pricing strategy for European calls and puts.
//!
//! This module provides the simulation side of the pricing engine:
//!
//! - Exact sampling of the terminal price under risk-neutral GBM
//! - Antithetic variates (on by default)
//! - Greeks by bump-and-revalue with common random numbers
//! - Chunk-parallel accumulation on rayon with deterministic reduction
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (path count, seed, antithetic flag)
//! ├── PricerRng          (one seeded stream per chunk)
//! └── Orchestration
//!     ├── TerminalSampler     (one per scenario, shared draw)
//!     ├── ScenarioEstimates   (running sums per scenario)
//!     └── finite_difference_greeks()
//! ```
//!
//! # Reproducibility
//!
//! Samples are split into chunks of [`CHUNK_SIZE`]. Chunk `i` draws from a
//! generator seeded with `derive_chunk_seed(seed, i)` and the per-chunk
//! sums are merged in chunk order, so a given configuration returns the
//! same result on any number of threads.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketState;
//! use pricer_core::traits::PricingStrategy;
//! use pricer_core::types::{Date, OptionContract};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(50_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
//! let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
//!
//! let result = pricer.calculate(&contract, &market, valuation).unwrap();
//! assert!((result.call_price - 10.45).abs() < 0.5);
//!
//! let greeks = result.greeks.unwrap();
//! println!("Delta: {:.4}", greeks.delta_call);
//! ```

mod config;
mod error;
pub mod estimator;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, MAX_PATHS, MIN_PATHS};
pub use error::ConfigError;
pub use estimator::{Moments, Scenario, ScenarioEstimates, N_SCENARIOS};
pub use pricer::{MonteCarloPricer, CHUNK_SIZE};
