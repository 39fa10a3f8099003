//! Closed-form pricing for European options.
//!
//! This module provides:
//! - Black-Scholes kernel and the `AnalyticStrategy` pricing strategy
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal CDF and PDF
//!
//! ## Design Principles
//!
//! - **Pure functions**: results depend only on the inputs and the explicit
//!   valuation date
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{AnalyticStrategy, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::{calculate_greeks, GreeksInputs};
