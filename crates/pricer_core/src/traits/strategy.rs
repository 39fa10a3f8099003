//! The pricing-strategy contract.
//!
//! Every pricing model (closed-form, simulation) implements
//! [`PricingStrategy`] and returns the same [`PricingResult`] shape, so
//! callers such as the sensitivity-grid evaluator never need to know which
//! model they drive.

use crate::market_data::MarketState;
use crate::types::{Date, OptionContract, PricingError, PricingResult};

/// Uniform pricing contract for vanilla European options.
///
/// # Contract
///
/// Implementations must:
/// - re-validate `contract` and `market` (see [`validate_inputs`]) and fail
///   with `PricingError::InvalidParameter` rather than clamp
/// - derive time to maturity from `valuation_date` (ACT/365) and return
///   intrinsic values with `greeks: None` once it is zero or negative
/// - price the call and the put together, both scaled by the exercise ratio
/// - be deterministic for identical inputs
///
/// The `Send + Sync` bound lets a single strategy value be shared across
/// worker threads.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketState;
/// use pricer_core::traits::{validate_inputs, PricingStrategy};
/// use pricer_core::types::{Date, OptionContract, PricingError, PricingResult};
///
/// /// Prices every contract at its intrinsic value.
/// struct IntrinsicOnly;
///
/// impl PricingStrategy for IntrinsicOnly {
///     fn name(&self) -> &'static str {
///         "intrinsic"
///     }
///
///     fn calculate(
///         &self,
///         contract: &OptionContract,
///         market: &MarketState,
///         _valuation_date: Date,
///     ) -> Result<PricingResult, PricingError> {
///         validate_inputs(contract, market)?;
///         Ok(PricingResult::intrinsic(
///             market.underlying_price(),
///             contract.strike(),
///             contract.exercise_ratio(),
///         ))
///     }
/// }
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, today, 1.0).unwrap();
/// let market = MarketState::new(104.0, 0.05, 0.2).unwrap();
/// let result = IntrinsicOnly.calculate(&contract, &market, today).unwrap();
/// assert_eq!(result.call_price, 4.0);
/// ```
pub trait PricingStrategy: Send + Sync {
    /// Short identifier used in logs and output (e.g. `"analytic"`).
    fn name(&self) -> &'static str;

    /// Prices the call and the put on `contract` under `market`.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if any input violates its constraint.
    fn calculate(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        valuation_date: Date,
    ) -> Result<PricingResult, PricingError>;
}

impl<S: PricingStrategy + ?Sized> PricingStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn calculate(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        valuation_date: Date,
    ) -> Result<PricingResult, PricingError> {
        (**self).calculate(contract, market, valuation_date)
    }
}

/// Re-checks contract and market constraints before pricing.
///
/// Values built through the validating constructors always pass; this
/// catches values that arrived by other routes (e.g. deserialisation).
pub fn validate_inputs(
    contract: &OptionContract,
    market: &MarketState,
) -> Result<(), PricingError> {
    market.validate()?;
    contract.validate()
}
