//! Black-Scholes-Merton pricing for European options.
//!
//! This module provides:
//! - `BlackScholes`: the closed-form kernel (d₁, d₂, call and put prices)
//! - `AnalyticStrategy`: the [`PricingStrategy`] built on the kernel and
//!   the closed-form Greeks in [`super::greeks`]
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) − K·e^(−rτ)·Φ(d₂)
//! **Put Price**: P = K·e^(−rτ)·Φ(−d₂) − S·Φ(−d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)τ) / (σ√τ)
//! - d₂ = d₁ − σ√τ

use pricer_core::market_data::MarketState;
use pricer_core::traits::{validate_inputs, PricingStrategy};
use pricer_core::types::error::{ensure_finite, ensure_positive};
use pricer_core::types::{Date, OptionContract, PricingError, PricingResult};

use super::distributions::norm_cdf;
use super::greeks::{calculate_greeks, GreeksInputs};

/// Black-Scholes kernel for one spot, rate and volatility.
///
/// Expiry-dependent methods expect `expiry > 0`; prices fall back to
/// intrinsic value otherwise.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new kernel.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` or `volatility` is not a
    /// finite positive number, or `rate` is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, -0.01, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("underlying_price", spot)?,
            rate: ensure_finite("risk_free_rate", rate)?,
            volatility: ensure_positive("volatility", volatility)?,
        })
    }

    /// Kernel for a validated market snapshot.
    pub fn from_market(market: &MarketState) -> Self {
        Self {
            spot: market.underlying_price(),
            rate: market.risk_free_rate(),
            volatility: market.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor e^(−r·expiry).
    #[inline]
    pub fn discount(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)τ) / (σ√τ)
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / (self.volatility * expiry.sqrt())
    }

    /// d₂ = d₁ − σ√τ
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price per unit.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return (self.spot - strike).max(0.0);
        }
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        self.spot * norm_cdf(d1) - strike * self.discount(expiry) * norm_cdf(d2)
    }

    /// European put price per unit.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return (strike - self.spot).max(0.0);
        }
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        -self.spot * norm_cdf(-d1) + strike * self.discount(expiry) * norm_cdf(-d2)
    }

    /// Intermediate values for [`calculate_greeks`]; requires `expiry > 0`.
    pub fn greeks_inputs(&self, strike: f64, expiry: f64) -> GreeksInputs {
        let sqrt_t = expiry.sqrt();
        let d1 = self.d1(strike, expiry);
        GreeksInputs {
            spot: self.spot,
            strike,
            rate: self.rate,
            volatility: self.volatility,
            time_to_maturity: expiry,
            sqrt_t,
            discount: self.discount(expiry),
            d1,
            d2: d1 - self.volatility * sqrt_t,
        }
    }
}

/// Closed-form Black-Scholes pricing strategy.
///
/// Prices are exact under lognormal dynamics (up to the ~1e-7 accuracy of
/// Φ); the eight Greeks come from [`calculate_greeks`]. Prices and Greeks
/// are scaled by the contract's exercise ratio.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketState;
/// use pricer_core::traits::PricingStrategy;
/// use pricer_core::types::{Date, OptionContract};
/// use pricer_models::analytical::AnalyticStrategy;
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let result = AnalyticStrategy.calculate(&contract, &market, valuation).unwrap();
/// assert!((result.call_price - 10.4506).abs() < 1e-4);
/// assert!((result.put_price - 5.5735).abs() < 1e-4);
/// assert!(result.greeks.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticStrategy;

impl AnalyticStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl PricingStrategy for AnalyticStrategy {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn calculate(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        valuation_date: Date,
    ) -> Result<PricingResult, PricingError> {
        validate_inputs(contract, market)?;

        let strike = contract.strike();
        let ratio = contract.exercise_ratio();
        let tau = contract.time_to_maturity(valuation_date);

        if tau <= 0.0 {
            return Ok(PricingResult::intrinsic(
                market.underlying_price(),
                strike,
                ratio,
            ));
        }

        let bs = BlackScholes::from_market(market);
        let greeks = calculate_greeks(&bs.greeks_inputs(strike, tau));

        Ok(PricingResult {
            call_price: bs.price_call(strike, tau) * ratio,
            put_price: bs.price_put(strike, tau) * ratio,
            greeks: Some(greeks.scale(ratio)),
            std_error: None,
        })
    }
}
