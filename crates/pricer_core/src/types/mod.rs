//! Core value types for option pricing.
//!
//! This module provides:
//! - `time`: `Date` and the ACT/365 `time_to_maturity` measure
//! - `contract`: `OptionContract` terms and the `OptionType` selector
//! - `result`: `PricingResult`, `GreeksSet` and `StandardError`
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`time_to_maturity`] from `time`
//! - [`OptionContract`], [`OptionType`] from `contract`
//! - [`GreeksSet`], [`PricingResult`], [`StandardError`] from `result`
//! - [`PricingError`], [`DateError`] from `error`

pub mod contract;
pub mod error;
pub mod result;
pub mod time;

// Re-export commonly used types at module level
pub use contract::{OptionContract, OptionType};
pub use error::{DateError, PricingError};
pub use result::{GreeksSet, PricingResult, StandardError};
pub use time::{time_to_maturity, Date};
