//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing serves as the simulation engine in the 4-layer architecture:
//! - Monte Carlo pricing strategy with finite-difference Greeks
//! - Reproducible, chunk-seeded random number generation
//! - Static dispatch over every shipped strategy via [`strategy::PricingModel`]
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): contract, market and result types, the
//!   `PricingStrategy` trait
//! - Layer 2 (pricer_models): `AnalyticStrategy` and the Greeks unit
//!   conventions
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::MarketState;
//! use pricer_core::types::{Date, OptionContract};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//! use pricer_pricing::strategy::{price_option, PricingModel};
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
//! let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
//!
//! let analytic = price_option(&contract, &market, &PricingModel::default(), valuation).unwrap();
//!
//! let config = MonteCarloConfig::builder().n_paths(50_000).seed(7).build().unwrap();
//! let mc = PricingModel::from(MonteCarloPricer::new(config).unwrap());
//! let simulated = price_option(&contract, &market, &mc, valuation).unwrap();
//!
//! let se = simulated.std_error.unwrap().call;
//! assert!((simulated.call_price - analytic.call_price).abs() < 5.0 * se);
//! ```
//!
//! ## Modules
//!
//! - [`mc`]: Monte Carlo configuration, estimators and the pricer
//! - [`rng`]: Seeded PRNG wrapper and per-chunk seed derivation
//! - [`strategy`]: `PricingModel` and `price_option`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod strategy;

pub use strategy::{price_option, PricingModel};
