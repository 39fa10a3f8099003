//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and grid-evaluation operations
//! - `DateError`: Errors from date construction and parsing

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure names the offending input so that a caller can point the
/// user at the field to correct. No variant carries a partial result.
///
/// # Variants
/// - `InvalidParameter`: A contract or market input violates its constraint
/// - `InvalidRange`: A sensitivity-grid axis is malformed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("strike", 0.0, "must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'strike' = 0: must be positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// A pricing input violates its constraint.
    #[error("Invalid parameter '{field}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending field (e.g. `"volatility"`)
        field: String,
        /// The rejected value, as supplied
        value: String,
        /// The violated constraint
        reason: String,
    },

    /// A sensitivity-grid axis is malformed.
    #[error("Invalid range for axis '{axis}': {reason}")]
    InvalidRange {
        /// Name of the offending axis (e.g. `"x"`)
        axis: String,
        /// Description of the problem
        reason: String,
    },
}

impl PricingError {
    /// Creates an [`PricingError::InvalidParameter`] error.
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an [`PricingError::InvalidRange`] error.
    pub fn invalid_range(axis: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            axis: axis.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field or axis name.
    pub fn subject(&self) -> &str {
        match self {
            Self::InvalidParameter { field, .. } => field,
            Self::InvalidRange { axis, .. } => axis,
        }
    }
}

/// Checks that `value` is finite and strictly positive.
///
/// NaN fails the check, so callers never divide by a non-positive or
/// undefined quantity further down.
///
/// # Examples
/// ```
/// use pricer_core::types::error::ensure_positive;
///
/// assert!(ensure_positive("strike", 100.0).is_ok());
/// assert!(ensure_positive("strike", 0.0).is_err());
/// assert!(ensure_positive("strike", f64::NAN).is_err());
/// ```
pub fn ensure_positive(field: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(
            field,
            value,
            "must be a finite positive number",
        ))
    }
}

/// Checks that `value` is finite (rates may be zero or negative).
pub fn ensure_finite(field: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(
            field,
            value,
            "must be a finite number",
        ))
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
