//! # Pricer Risk (L4: Application)
//!
//! Sensitivity analysis on top of the pricing strategies.
//!
//! This crate provides:
//! - Sweep axes over spot, volatility, rate and strike
//! - Two-dimensional call/put price grids
//! - Rayon-based row parallelism for grid evaluation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  sensitivity/ - GridAxis, GridDimension │
//! │                 SensitivityGrid         │
//! └─────────────────────────────────────────┘
//!          ↓  any PricingStrategy
//! ┌─────────────────────────────────────────┐
//! │  pricer_models (L2) / pricer_pricing (L3)│
//! │  AnalyticStrategy, MonteCarloPricer     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The evaluator depends only on `pricer_core::traits::PricingStrategy`;
//! the concrete strategy is chosen by the caller.
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketState;
//! use pricer_core::types::{Date, OptionContract};
//! use pricer_pricing::strategy::PricingModel;
//! use pricer_risk::sensitivity::{compute_sensitivity_grid, GridAxis, GridDimension};
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
//! let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
//!
//! let grid = compute_sensitivity_grid(
//!     &PricingModel::default(),
//!     &contract,
//!     &market,
//!     valuation,
//!     GridAxis::new(GridDimension::Strike, 80.0, 120.0, 5),
//!     GridAxis::new(GridDimension::RiskFreeRate, 0.0, 0.1, 3),
//! )
//! .unwrap();
//!
//! assert_eq!(grid.shape(), (3, 5));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sensitivity;
