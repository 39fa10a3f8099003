//! Closed-form Black-Scholes sensitivities.
//!
//! [`calculate_greeks`] is a pure leaf: it takes the intermediate values a
//! pricer has already derived (`d1`, `d2`, `√τ`, discount factor) and
//! returns the eight Greeks per unit of the contract. Scaling by the
//! exercise ratio is left to the caller.

use pricer_core::types::time::DAYS_PER_YEAR;
use pricer_core::types::GreeksSet;

use super::distributions::{norm_cdf, norm_pdf};

/// Quoting unit for vega and rho: one percentage point.
pub const PERCENT: f64 = 0.01;

/// Intermediate values of a Black-Scholes evaluation.
///
/// Callers guarantee `time_to_maturity > 0`, `volatility > 0` and
/// `spot > 0`; the formulas divide by `spot·σ·√τ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreeksInputs {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Time to maturity in years (τ)
    pub time_to_maturity: f64,
    /// √τ
    pub sqrt_t: f64,
    /// e^(−rτ)
    pub discount: f64,
    /// d₁
    pub d1: f64,
    /// d₂
    pub d2: f64,
}

/// Computes the eight Greeks for one unit of the contract.
///
/// - Delta: Φ(d₁) for the call, Φ(d₁) − 1 for the put
/// - Gamma: φ(d₁) / (S·σ·√τ)
/// - Vega: S·φ(d₁)·√τ per vol point
/// - Theta: calendar-day decay, `[−S·φ(d₁)·σ/(2√τ) ∓ r·K·e^(−rτ)·Φ(±d₂)] / 365`
/// - Rho: ±K·τ·e^(−rτ)·Φ(±d₂) per rate point
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks::{calculate_greeks, GreeksInputs};
///
/// let (spot, strike, rate, vol, tau): (f64, f64, f64, f64, f64) =
///     (100.0, 100.0, 0.05, 0.2, 1.0);
/// let sqrt_t = tau.sqrt();
/// let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * tau) / (vol * sqrt_t);
/// let greeks = calculate_greeks(&GreeksInputs {
///     spot,
///     strike,
///     rate,
///     volatility: vol,
///     time_to_maturity: tau,
///     sqrt_t,
///     discount: (-rate * tau).exp(),
///     d1,
///     d2: d1 - vol * sqrt_t,
/// });
///
/// assert!((greeks.delta_call - greeks.delta_put - 1.0).abs() < 1e-12);
/// assert!((greeks.vega - 0.3752).abs() < 1e-4);
/// ```
pub fn calculate_greeks(inputs: &GreeksInputs) -> GreeksSet {
    let GreeksInputs {
        spot,
        strike,
        rate,
        volatility,
        time_to_maturity,
        sqrt_t,
        discount,
        d1,
        d2,
    } = *inputs;

    let n_d1 = norm_cdf(d1);
    let pdf_d1 = norm_pdf(d1);
    let n_d2 = norm_cdf(d2);
    let n_minus_d2 = norm_cdf(-d2);
    let discounted_strike = strike * discount;

    // Shared decay term: −S·φ(d₁)·σ / (2√τ)
    let decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    GreeksSet {
        delta_call: n_d1,
        delta_put: n_d1 - 1.0,
        gamma: pdf_d1 / (spot * volatility * sqrt_t),
        vega: spot * pdf_d1 * sqrt_t * PERCENT,
        theta_call: (decay - rate * discounted_strike * n_d2) / DAYS_PER_YEAR,
        theta_put: (decay + rate * discounted_strike * n_minus_d2) / DAYS_PER_YEAR,
        rho_call: discounted_strike * time_to_maturity * n_d2 * PERCENT,
        rho_put: -discounted_strike * time_to_maturity * n_minus_d2 * PERCENT,
    }
}
