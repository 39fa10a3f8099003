//! Vanilla option contract definitions.
//!
//! A contract carries only what is fixed at trade time: strike, maturity
//! and the exercise ratio. Both the call and the put on the same terms are
//! always priced together, so the contract has no call/put flag;
//! [`OptionType`] selects a side of a [`PricingResult`] afterwards.

use std::fmt;
use std::str::FromStr;

use super::error::{ensure_positive, PricingError};
use super::result::PricingResult;
use super::time::{time_to_maturity, Date};

/// Option side (Call or Put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Intrinsic value at the given spot, per unit.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Picks this side's price out of a two-sided result.
    #[inline]
    pub fn select(&self, result: &PricingResult) -> f64 {
        match self {
            OptionType::Call => result.call_price,
            OptionType::Put => result.put_price,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"` (any case).
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming `option_type` for any other
    /// selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_parameter(
                "option_type",
                s,
                "must be 'call' or 'put'",
            )),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// European option contract on a single underlying.
///
/// Immutable once constructed; every constructor validates its inputs.
///
/// # Examples
/// ```
/// use pricer_core::types::{Date, OptionContract};
///
/// let maturity = Date::from_ymd(2026, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, maturity, 1.0).unwrap();
/// assert_eq!(contract.strike(), 100.0);
///
/// assert!(OptionContract::new(0.0, maturity, 1.0).is_err());
/// assert!(OptionContract::new(100.0, maturity, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    strike: f64,
    maturity_date: Date,
    exercise_ratio: f64,
}

impl OptionContract {
    /// Creates a new contract.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` or `exercise_ratio` is not
    /// a finite positive number.
    pub fn new(
        strike: f64,
        maturity_date: Date,
        exercise_ratio: f64,
    ) -> Result<Self, PricingError> {
        let contract = Self {
            strike,
            maturity_date,
            exercise_ratio,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Re-checks the field constraints.
    ///
    /// Strategies call this before pricing, which also covers contracts
    /// that arrived through deserialisation.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("exercise_ratio", self.exercise_ratio)?;
        Ok(())
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Maturity date.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Multiplier applied to prices and Greeks.
    #[inline]
    pub fn exercise_ratio(&self) -> f64 {
        self.exercise_ratio
    }

    /// Years from `valuation_date` to maturity (ACT/365), possibly negative.
    #[inline]
    pub fn time_to_maturity(&self, valuation_date: Date) -> f64 {
        time_to_maturity(valuation_date, self.maturity_date)
    }

    /// Copy of this contract with a different strike.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self::new(strike, self.maturity_date, self.exercise_ratio)
    }

    /// Copy of this contract with a different exercise ratio.
    pub fn with_exercise_ratio(&self, exercise_ratio: f64) -> Result<Self, PricingError> {
        Self::new(self.strike, self.maturity_date, exercise_ratio)
    }
}
