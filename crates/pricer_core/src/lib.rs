//! # pricer_core: Value Types and the Pricing-Strategy Contract
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Contract and result types: `OptionContract`, `OptionType`,
//!   `PricingResult`, `GreeksSet` (`types`)
//! - Time types: `Date`, `time_to_maturity` (`types::time`)
//! - The flat market snapshot `MarketState` (`market_data`)
//! - The `PricingStrategy` trait every pricing model implements (`traits`)
//! - Sample-point generation for parameter sweeps (`math::grid`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketState;
//! use pricer_core::types::{Date, OptionContract, OptionType, PricingResult};
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! let contract = OptionContract::new(100.0, maturity, 1.0).unwrap();
//! let market = MarketState::new(100.0, 0.05, 0.20).unwrap();
//! assert_eq!(contract.time_to_maturity(valuation), 1.0);
//!
//! // Contracts at or past maturity carry intrinsic value only
//! let expired = PricingResult::intrinsic(market.underlying_price(), 90.0, 1.0);
//! assert_eq!(OptionType::Call.select(&expired), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for every value type (dates as ISO 8601)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
