//! Pricing result payloads shared by every strategy.
//!
//! - `GreeksSet`: the eight named sensitivities of a call/put pair
//! - `StandardError`: sampling error of simulation-based prices
//! - `PricingResult`: call price, put price and optional Greeks

/// Sensitivities of a call/put pair on the same terms.
///
/// `gamma` and `vega` are shared by the call and the put. Units follow
/// desk conventions: `vega` and the rhos are per one percentage point,
/// the thetas per calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksSet {
    /// ∂C/∂S
    pub delta_call: f64,
    /// ∂P/∂S
    pub delta_put: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1 vol point
    pub vega: f64,
    /// Call time decay per calendar day
    pub theta_call: f64,
    /// Put time decay per calendar day
    pub theta_put: f64,
    /// ∂C/∂r per 1 rate point
    pub rho_call: f64,
    /// ∂P/∂r per 1 rate point
    pub rho_put: f64,
}

impl GreeksSet {
    /// Multiplies every sensitivity by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta_call: self.delta_call * factor,
            delta_put: self.delta_put * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta_call: self.theta_call * factor,
            theta_put: self.theta_put * factor,
            rho_call: self.rho_call * factor,
            rho_put: self.rho_put * factor,
        }
    }

    /// Name/value pairs in a fixed display order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("delta_call", self.delta_call),
            ("delta_put", self.delta_put),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("theta_call", self.theta_call),
            ("theta_put", self.theta_put),
            ("rho_call", self.rho_call),
            ("rho_put", self.rho_put),
        ]
    }
}

/// Standard error of simulated call and put prices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardError {
    /// Standard error of the call price estimate
    pub call: f64,
    /// Standard error of the put price estimate
    pub put: f64,
}

impl StandardError {
    /// Multiplies both errors by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            call: self.call * factor,
            put: self.put * factor,
        }
    }
}

/// Call and put prices with optional sensitivities.
///
/// `greeks` is `None` when the contract has no time value left (on or after
/// maturity); it is never filled with zeros.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingResult;
///
/// let expired = PricingResult::intrinsic(110.0, 100.0, 2.0);
/// assert_eq!(expired.call_price, 20.0);
/// assert_eq!(expired.put_price, 0.0);
/// assert!(expired.greeks.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Call price, scaled by the exercise ratio
    pub call_price: f64,
    /// Put price, scaled by the exercise ratio
    pub put_price: f64,
    /// Sensitivities, absent at or after maturity
    pub greeks: Option<GreeksSet>,
    /// Sampling error, present for simulation-based prices only
    pub std_error: Option<StandardError>,
}

impl PricingResult {
    /// Intrinsic-value result for a contract with no time value left.
    pub fn intrinsic(spot: f64, strike: f64, exercise_ratio: f64) -> Self {
        Self {
            call_price: (spot - strike).max(0.0) * exercise_ratio,
            put_price: (strike - spot).max(0.0) * exercise_ratio,
            greeks: None,
            std_error: None,
        }
    }

    /// Returns true when sensitivities are present.
    #[inline]
    pub fn has_greeks(&self) -> bool {
        self.greeks.is_some()
    }
}
