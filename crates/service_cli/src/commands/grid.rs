//! Grid command implementation
//!
//! Sweeps two inputs and prints the resulting call and/or put price matrix.

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_core::traits::PricingStrategy;
use pricer_core::types::{Date, OptionType};
use pricer_risk::sensitivity::{compute_sensitivity_grid, GridAxis, GridDimension, SensitivityGrid};

use super::{render_table, ContractArgs, ModelArgs};
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Arguments of `pricer grid`
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Input swept along the columns (spot, volatility, rate, strike)
    #[arg(long, default_value = "spot")]
    pub x_dimension: GridDimension,

    /// First column value
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Last column value
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Number of columns
    #[arg(long, default_value_t = 5)]
    pub x_count: usize,

    /// Input swept along the rows (spot, volatility, rate, strike)
    #[arg(long, default_value = "volatility")]
    pub y_dimension: GridDimension,

    /// First row value
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: f64,

    /// Last row value
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: f64,

    /// Number of rows
    #[arg(long, default_value_t = 5)]
    pub y_count: usize,

    /// Show only one side (call, put)
    #[arg(long)]
    pub side: Option<OptionType>,
}

impl GridArgs {
    fn axes(&self) -> (GridAxis, GridAxis) {
        (
            GridAxis::new(self.x_dimension, self.x_min, self.x_max, self.x_count),
            GridAxis::new(self.y_dimension, self.y_min, self.y_max, self.y_count),
        )
    }
}

/// Full grid with both sides
#[derive(Debug, Serialize)]
pub struct GridReport<'a> {
    model: &'static str,
    valuation_date: Date,
    #[serde(flatten)]
    grid: &'a SensitivityGrid,
}

/// Grid restricted to one side
#[derive(Debug, Serialize)]
struct SideGridReport<'a> {
    model: &'static str,
    valuation_date: Date,
    side: OptionType,
    x_dimension: GridDimension,
    y_dimension: GridDimension,
    x_values: &'a [f64],
    y_values: &'a [f64],
    prices: &'a [Vec<f64>],
}

/// Run the grid command
pub fn run(args: &GridArgs, config: &PricerConfig) -> Result<()> {
    let (contract, market, valuation_date) = args.contract.build()?;
    let model = config.pricing_model()?;
    let (x_axis, y_axis) = args.axes();

    info!(
        model = model.name(),
        valuation_date = %valuation_date,
        cells = x_axis.count.saturating_mul(y_axis.count),
        "Computing grid"
    );

    let grid = compute_sensitivity_grid(
        &model,
        &contract,
        &market,
        valuation_date,
        x_axis,
        y_axis,
    )?;
    let report = GridReport {
        model: model.name(),
        valuation_date,
        grid: &grid,
    };

    println!("{}", render(&report, args.side, config.format)?);
    Ok(())
}

/// Formats a grid in the requested output format
pub fn render(
    report: &GridReport<'_>,
    side: Option<OptionType>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = match side {
                Some(side) => serde_json::to_string_pretty(&SideGridReport {
                    model: report.model,
                    valuation_date: report.valuation_date,
                    side,
                    x_dimension: report.grid.x_dimension(),
                    y_dimension: report.grid.y_dimension(),
                    x_values: report.grid.x_values(),
                    y_values: report.grid.y_values(),
                    prices: report.grid.prices(side),
                })?,
                None => serde_json::to_string_pretty(report)?,
            };
            Ok(json)
        }
        OutputFormat::Table => {
            let sides = match side {
                Some(side) => vec![side],
                None => vec![OptionType::Call, OptionType::Put],
            };
            let tables: Vec<String> = sides
                .into_iter()
                .map(|side| render_side_table(report, side))
                .collect();
            Ok(tables.join("\n\n"))
        }
    }
}

fn render_side_table(report: &GridReport<'_>, side: OptionType) -> String {
    let grid = report.grid;
    let title = match side {
        OptionType::Call => "Call prices",
        OptionType::Put => "Put prices",
    };

    let corner = format!("{} \\ {}", grid.y_dimension(), grid.x_dimension());
    let mut header = vec![corner];
    header.extend(grid.x_values().iter().map(|x| format!("{:.4}", x)));

    let rows: Vec<Vec<String>> = grid
        .y_values()
        .iter()
        .zip(grid.prices(side))
        .map(|(y, prices)| {
            std::iter::once(format!("{:.4}", y))
                .chain(prices.iter().map(|p| format!("{:.4}", p)))
                .collect()
        })
        .collect();

    format!(
        "{} ({}, valued {})\n{}",
        title,
        report.model,
        report.valuation_date,
        render_table(&header, &rows)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::MarketState;
    use pricer_core::types::OptionContract;
    use pricer_models::analytical::AnalyticStrategy;

    fn grid() -> SensitivityGrid {
        let maturity = Date::from_ymd(2026, 1, 1).unwrap();
        let contract = OptionContract::new(100.0, maturity, 1.0).unwrap();
        let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
        compute_sensitivity_grid(
            &AnalyticStrategy,
            &contract,
            &market,
            Date::from_ymd(2025, 1, 1).unwrap(),
            GridAxis::new(GridDimension::UnderlyingPrice, 90.0, 110.0, 3),
            GridAxis::new(GridDimension::Volatility, 0.1, 0.3, 3),
        )
        .unwrap()
    }

    fn report(grid: &SensitivityGrid) -> GridReport<'_> {
        GridReport {
            model: "analytic",
            valuation_date: Date::from_ymd(2025, 1, 1).unwrap(),
            grid,
        }
    }

    #[test]
    fn test_table_layout() {
        let grid = grid();
        let table = render(&report(&grid), Some(OptionType::Call), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Call prices"));
        assert!(lines[2].contains("volatility \\ spot"));
        assert!(lines[2].contains("90.0000"));
        assert!(lines[2].contains("110.0000"));
        // Title, three rules, header and three rows
        assert_eq!(lines.len(), 8);
        assert!(!table.contains("Put prices"));
    }

    #[test]
    fn test_table_both_sides() {
        let grid = grid();
        let table = render(&report(&grid), None, OutputFormat::Table).unwrap();
        assert!(table.contains("Call prices"));
        assert!(table.contains("Put prices"));
    }

    #[test]
    fn test_json_full_grid() {
        let grid = grid();
        let json = render(&report(&grid), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["x_dimension"], "underlying_price");
        assert_eq!(value["y_dimension"], "volatility");
        assert_eq!(value["call_prices"].as_array().unwrap().len(), 3);
        assert_eq!(value["put_prices"][1][1], grid.put_prices()[1][1]);
    }

    #[test]
    fn test_json_single_side() {
        let grid = grid();
        let json = render(&report(&grid), Some(OptionType::Put), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["side"], "put");
        assert_eq!(value["prices"][0][2], grid.put_prices()[0][2]);
        assert!(value.get("call_prices").is_none());
    }
}
