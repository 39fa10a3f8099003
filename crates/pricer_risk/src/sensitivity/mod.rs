//! Sensitivity grids over pairs of pricing inputs.
//!
//! - [`axis`]: `GridDimension`, `GridAxis` and the axis size bound
//! - [`grid`]: `SensitivityGrid` and `compute_sensitivity_grid`

pub mod axis;
pub mod grid;

pub use axis::{GridAxis, GridDimension, MAX_AXIS_POINTS};
pub use grid::{compute_sensitivity_grid, SensitivityGrid};
