//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared argument groups
//! and the table renderer live here.

use clap::Args;

use pricer_core::market_data::MarketState;
use pricer_core::types::{Date, OptionContract};

use crate::config::{CliOverrides, ModelKind, OutputFormat};
use crate::Result;

pub mod check;
pub mod grid;
pub mod price;

/// Contract and market inputs shared by `price` and `grid`
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Maturity date (YYYY-MM-DD)
    #[arg(long)]
    pub maturity: Date,

    /// Continuously compounded risk-free rate (0.05 = 5%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility (0.2 = 20%)
    #[arg(long)]
    pub volatility: f64,

    /// Contract multiplier applied to prices and Greeks
    #[arg(long, default_value_t = 1.0)]
    pub exercise_ratio: f64,

    /// Valuation date (YYYY-MM-DD), today when omitted
    #[arg(long)]
    pub valuation_date: Option<Date>,
}

impl ContractArgs {
    /// Validated contract, market and valuation date
    pub fn build(&self) -> Result<(OptionContract, MarketState, Date)> {
        let contract = OptionContract::new(self.strike, self.maturity, self.exercise_ratio)?;
        let market = MarketState::new(self.spot, self.rate, self.volatility)?;
        let valuation_date = self.valuation_date.unwrap_or_else(Date::today);
        Ok((contract, market, valuation_date))
    }
}

/// Model and output flags, overriding the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Pricing model (analytic, monte-carlo)
    #[arg(short, long)]
    pub model: Option<ModelKind>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable antithetic variates
    #[arg(long)]
    pub no_antithetic: bool,

    /// Output format (table, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl ModelArgs {
    /// Flags as configuration overrides
    pub fn overrides(&self, verbose: bool) -> CliOverrides {
        CliOverrides {
            model: self.model,
            format: self.format,
            paths: self.paths,
            seed: self.seed,
            no_antithetic: self.no_antithetic,
            verbose,
        }
    }
}

/// Renders a box-drawn table; the first column is left-aligned, the rest
/// right-aligned.
pub fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let n_cols = header.len();
    let widths: Vec<usize> = (0..n_cols)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(&header[col]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &w)| {
                let cell = cells.get(col).map(String::as_str).unwrap_or("");
                if col == 0 {
                    format!(" {:<w$} ", cell, w = w)
                } else {
                    format!(" {:>w$} ", cell, w = w)
                }
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(rule("┌", "┬", "┐"));
    out.push(line(header));
    out.push(rule("├", "┼", "┤"));
    out.extend(rows.iter().map(|row| line(row)));
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}
