//! Numerical helpers.
//!
//! - [`grid`]: Evenly spaced sample points for parameter sweeps

pub mod grid;

pub use grid::linspace;
