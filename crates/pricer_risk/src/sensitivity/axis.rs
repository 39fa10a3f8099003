//! Sweep axes for sensitivity grids.
//!
//! This module provides:
//! - `GridDimension`: which contract or market input an axis varies
//! - `GridAxis`: a dimension with its range and number of sample points
//! - `MAX_AXIS_POINTS`: the per-axis size bound

use std::fmt;
use std::str::FromStr;

use pricer_core::market_data::MarketState;
use pricer_core::math::linspace;
use pricer_core::types::{OptionContract, PricingError};

/// Maximum number of sample points on one axis.
///
/// Bounds a grid at `MAX_AXIS_POINTS²` pricing calls.
pub const MAX_AXIS_POINTS: usize = 500;

/// Input swept along one axis of a sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridDimension {
    /// Spot price of the underlying
    UnderlyingPrice,
    /// Annualised volatility
    Volatility,
    /// Continuously compounded risk-free rate
    RiskFreeRate,
    /// Contract strike
    Strike,
}

impl GridDimension {
    /// Short name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            GridDimension::UnderlyingPrice => "spot",
            GridDimension::Volatility => "volatility",
            GridDimension::RiskFreeRate => "rate",
            GridDimension::Strike => "strike",
        }
    }

    /// Copies of `contract` and `market` with this input set to `value`.
    ///
    /// Every other field is carried over unchanged.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `value` violates the constraint
    /// of the substituted field (e.g. a non-positive volatility).
    pub fn apply(
        &self,
        contract: &OptionContract,
        market: &MarketState,
        value: f64,
    ) -> Result<(OptionContract, MarketState), PricingError> {
        match self {
            GridDimension::UnderlyingPrice => Ok((*contract, market.with_underlying_price(value)?)),
            GridDimension::Volatility => Ok((*contract, market.with_volatility(value)?)),
            GridDimension::RiskFreeRate => Ok((*contract, market.with_risk_free_rate(value)?)),
            GridDimension::Strike => Ok((contract.with_strike(value)?, *market)),
        }
    }
}

impl FromStr for GridDimension {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spot" | "underlying_price" | "price" => Ok(GridDimension::UnderlyingPrice),
            "volatility" | "vol" => Ok(GridDimension::Volatility),
            "rate" | "risk_free_rate" => Ok(GridDimension::RiskFreeRate),
            "strike" => Ok(GridDimension::Strike),
            _ => Err(PricingError::invalid_parameter(
                "dimension",
                s,
                "must be one of 'spot', 'volatility', 'rate', 'strike'",
            )),
        }
    }
}

impl fmt::Display for GridDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One axis of a sensitivity grid: `count` points from `min` to `max`.
///
/// Construction does not validate; [`GridAxis::validate`] runs before any
/// pricing so that the error can name the axis.
///
/// # Examples
/// ```
/// use pricer_risk::sensitivity::{GridAxis, GridDimension};
///
/// let axis = GridAxis::new(GridDimension::UnderlyingPrice, 90.0, 110.0, 3);
/// assert!(axis.validate("x").is_ok());
/// assert_eq!(axis.points(), vec![90.0, 100.0, 110.0]);
///
/// let flat = GridAxis::new(GridDimension::Volatility, 0.2, 0.2, 3);
/// assert!(flat.validate("y").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAxis {
    /// Swept input
    pub dimension: GridDimension,
    /// First sample point
    pub min: f64,
    /// Last sample point
    pub max: f64,
    /// Number of sample points, both ends included
    pub count: usize,
}

impl GridAxis {
    /// Creates an axis.
    pub fn new(dimension: GridDimension, min: f64, max: f64, count: usize) -> Self {
        Self {
            dimension,
            min,
            max,
            count,
        }
    }

    /// Checks the range and point count.
    ///
    /// # Errors
    /// `PricingError::InvalidRange` naming `axis` if the bounds are not
    /// finite, `min >= max`, or `count` is outside `2..=MAX_AXIS_POINTS`.
    pub fn validate(&self, axis: &str) -> Result<(), PricingError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PricingError::invalid_range(
                axis,
                format!("bounds must be finite, got [{}, {}]", self.min, self.max),
            ));
        }
        if self.min >= self.max {
            return Err(PricingError::invalid_range(
                axis,
                format!("min must be below max, got [{}, {}]", self.min, self.max),
            ));
        }
        if self.count < 2 {
            return Err(PricingError::invalid_range(
                axis,
                format!("count must be at least 2, got {}", self.count),
            ));
        }
        if self.count > MAX_AXIS_POINTS {
            return Err(PricingError::invalid_range(
                axis,
                format!(
                    "count must not exceed {}, got {}",
                    MAX_AXIS_POINTS, self.count
                ),
            ));
        }
        Ok(())
    }

    /// Evenly spaced sample points, `min` and `max` included.
    pub fn points(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.count)
    }
}
