//! Core traits for pricing strategies.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - The uniform pricing contract (`PricingStrategy` trait)
//!
//! Concrete strategies are selected through an enum of variants at
//! configuration time; callers stay generic over `S: PricingStrategy`.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod strategy;

pub use strategy::{validate_inputs, PricingStrategy};
