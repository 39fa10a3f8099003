//! Market observables for option pricing.
//!
//! A pricing call sees the market as a single flat snapshot: one spot, one
//! continuously compounded rate and one volatility for every maturity.
//!
//! # Components
//!
//! - [`state`]: The validated market snapshot (`MarketState`)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketState;
//!
//! let market = MarketState::new(100.0, 0.05, 0.20).unwrap();
//! let df = market.discount_factor(1.0);
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod state;

pub use state::MarketState;
