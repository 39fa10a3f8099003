//! Flat market snapshot: spot, risk-free rate and volatility.

use crate::types::error::{ensure_finite, ensure_positive, PricingError};

/// Market inputs shared by every pricing strategy.
///
/// The rate is annualised and continuously compounded; it may be zero or
/// negative. Spot and volatility must be finite and strictly positive.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketState;
///
/// let market = MarketState::new(100.0, -0.005, 0.25).unwrap();
/// assert_eq!(market.risk_free_rate(), -0.005);
///
/// assert!(MarketState::new(0.0, 0.05, 0.2).is_err());
/// assert!(MarketState::new(100.0, 0.05, -0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    underlying_price: f64,
    risk_free_rate: f64,
    volatility: f64,
}

impl MarketState {
    /// Creates a validated market snapshot.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming `underlying_price`,
    /// `risk_free_rate` or `volatility`.
    pub fn new(
        underlying_price: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let state = Self {
            underlying_price,
            risk_free_rate,
            volatility,
        };
        state.validate()?;
        Ok(state)
    }

    /// Re-checks the field constraints.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("underlying_price", self.underlying_price)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Spot price of the underlying (S).
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor `e^(−r·t)` for a horizon of `t` years.
    #[inline]
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.risk_free_rate * t).exp()
    }

    /// Copy with a different spot.
    pub fn with_underlying_price(&self, underlying_price: f64) -> Result<Self, PricingError> {
        Self::new(underlying_price, self.risk_free_rate, self.volatility)
    }

    /// Copy with a different rate.
    pub fn with_risk_free_rate(&self, risk_free_rate: f64) -> Result<Self, PricingError> {
        Self::new(self.underlying_price, risk_free_rate, self.volatility)
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.underlying_price, self.risk_free_rate, volatility)
    }
}
