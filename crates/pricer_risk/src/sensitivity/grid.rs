//! Two-dimensional sensitivity grid evaluation.
//!
//! [`compute_sensitivity_grid`] prices one contract at every combination of
//! two swept inputs. Rows are evaluated in parallel on the rayon global
//! pool; each cell goes through the same `PricingStrategy::calculate` call
//! a single-contract pricing request would make.

use rayon::prelude::*;
use tracing::{debug, info};

use pricer_core::market_data::MarketState;
use pricer_core::traits::PricingStrategy;
use pricer_core::types::{Date, OptionContract, OptionType, PricingError};

use super::axis::{GridAxis, GridDimension};

/// Call and put prices over a two-dimensional sweep.
///
/// Matrices are indexed `[row][column]`, where the row follows `y_values`
/// and the column follows `x_values`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    x_dimension: GridDimension,
    y_dimension: GridDimension,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    call_prices: Vec<Vec<f64>>,
    put_prices: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    /// Input swept along the columns.
    pub fn x_dimension(&self) -> GridDimension {
        self.x_dimension
    }

    /// Input swept along the rows.
    pub fn y_dimension(&self) -> GridDimension {
        self.y_dimension
    }

    /// Column sample points.
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Row sample points.
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Call prices, `[row][column]`.
    pub fn call_prices(&self) -> &[Vec<f64>] {
        &self.call_prices
    }

    /// Put prices, `[row][column]`.
    pub fn put_prices(&self) -> &[Vec<f64>] {
        &self.put_prices
    }

    /// Price matrix of one side.
    pub fn prices(&self, side: OptionType) -> &[Vec<f64>] {
        match side {
            OptionType::Call => &self.call_prices,
            OptionType::Put => &self.put_prices,
        }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y_values.len(), self.x_values.len())
    }
}

/// Prices `contract` over every `(x, y)` combination of two axes.
///
/// The cell at `[j][i]` holds the prices with the x-dimension set to
/// `x_values[i]` and the y-dimension set to `y_values[j]`; every other input
/// is taken from `contract` and `market` unchanged.
///
/// # Errors
///
/// - `PricingError::InvalidRange` naming `"x"` or `"y"` if an axis is
///   malformed, or naming `"y"` if both axes sweep the same input. Checked
///   before any pricing.
/// - Any error from a single evaluation (e.g. a volatility axis reaching
///   zero) aborts the whole grid. No partial grid is returned.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketState;
/// use pricer_core::types::{Date, OptionContract};
/// use pricer_models::analytical::AnalyticStrategy;
/// use pricer_risk::sensitivity::{compute_sensitivity_grid, GridAxis, GridDimension};
///
/// let valuation = Date::from_ymd(2025, 1, 1).unwrap();
/// let contract = OptionContract::new(100.0, Date::from_ymd(2026, 1, 1).unwrap(), 1.0).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let grid = compute_sensitivity_grid(
///     &AnalyticStrategy,
///     &contract,
///     &market,
///     valuation,
///     GridAxis::new(GridDimension::UnderlyingPrice, 90.0, 110.0, 3),
///     GridAxis::new(GridDimension::Volatility, 0.1, 0.3, 3),
/// )
/// .unwrap();
///
/// assert_eq!(grid.shape(), (3, 3));
/// // Calls rise with spot along each row
/// assert!(grid.call_prices()[1][0] < grid.call_prices()[1][2]);
/// ```
pub fn compute_sensitivity_grid<S: PricingStrategy + ?Sized>(
    strategy: &S,
    contract: &OptionContract,
    market: &MarketState,
    valuation_date: Date,
    x_axis: GridAxis,
    y_axis: GridAxis,
) -> Result<SensitivityGrid, PricingError> {
    x_axis.validate("x")?;
    y_axis.validate("y")?;
    if x_axis.dimension == y_axis.dimension {
        return Err(PricingError::invalid_range(
            "y",
            format!(
                "must sweep a different input than x, both sweep '{}'",
                x_axis.dimension
            ),
        ));
    }

    let x_values = x_axis.points();
    let y_values = y_axis.points();

    info!(
        strategy = strategy.name(),
        x = %x_axis.dimension,
        y = %y_axis.dimension,
        columns = x_values.len(),
        rows = y_values.len(),
        "Computing sensitivity grid"
    );

    let rows: Vec<Vec<(f64, f64)>> = y_values
        .par_iter()
        .map(|&y| -> Result<Vec<(f64, f64)>, PricingError> {
            let (row_contract, row_market) = y_axis.dimension.apply(contract, market, y)?;
            x_values
                .iter()
                .map(|&x| -> Result<(f64, f64), PricingError> {
                    let (cell_contract, cell_market) =
                        x_axis.dimension.apply(&row_contract, &row_market, x)?;
                    let result = strategy.calculate(&cell_contract, &cell_market, valuation_date)?;
                    Ok((result.call_price, result.put_price))
                })
                .collect()
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    let call_prices: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| row.iter().map(|&(call, _)| call).collect())
        .collect();
    let put_prices: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| row.iter().map(|&(_, put)| put).collect())
        .collect();

    debug!(
        cells = x_values.len() * y_values.len(),
        "Sensitivity grid complete"
    );

    Ok(SensitivityGrid {
        x_dimension: x_axis.dimension,
        y_dimension: y_axis.dimension,
        x_values,
        y_values,
        call_prices,
        put_prices,
    })
}
