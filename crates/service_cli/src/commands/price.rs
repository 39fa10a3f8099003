//! Price command implementation
//!
//! Prices one European call/put pair with the configured strategy and prints
//! prices and Greeks.

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_core::traits::PricingStrategy;
use pricer_core::types::{Date, GreeksSet, OptionType, PricingResult};
use pricer_pricing::strategy::price_option;

use super::{render_table, ContractArgs, ModelArgs};
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Arguments of `pricer price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Show only one side (call, put)
    #[arg(short = 't', long)]
    pub option_type: Option<OptionType>,
}

/// Full two-sided pricing report
#[derive(Debug, Serialize)]
pub struct PriceReport {
    model: &'static str,
    valuation_date: Date,
    maturity_date: Date,
    time_to_maturity: f64,
    #[serde(flatten)]
    result: PricingResult,
}

/// Greeks of a single side
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideGreeks {
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
}

impl SideGreeks {
    fn select(greeks: &GreeksSet, side: OptionType) -> Self {
        match side {
            OptionType::Call => Self {
                delta: greeks.delta_call,
                gamma: greeks.gamma,
                vega: greeks.vega,
                theta: greeks.theta_call,
                rho: greeks.rho_call,
            },
            OptionType::Put => Self {
                delta: greeks.delta_put,
                gamma: greeks.gamma,
                vega: greeks.vega,
                theta: greeks.theta_put,
                rho: greeks.rho_put,
            },
        }
    }
}

/// One-sided pricing report
#[derive(Debug, Serialize)]
pub struct SideReport {
    model: &'static str,
    valuation_date: Date,
    maturity_date: Date,
    time_to_maturity: f64,
    option_type: OptionType,
    price: f64,
    std_error: Option<f64>,
    greeks: Option<SideGreeks>,
}

impl PriceReport {
    fn side(&self, side: OptionType) -> SideReport {
        SideReport {
            model: self.model,
            valuation_date: self.valuation_date,
            maturity_date: self.maturity_date,
            time_to_maturity: self.time_to_maturity,
            option_type: side,
            price: side.select(&self.result),
            std_error: self.result.std_error.map(|se| match side {
                OptionType::Call => se.call,
                OptionType::Put => se.put,
            }),
            greeks: self.result.greeks.map(|g| SideGreeks::select(&g, side)),
        }
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &PricerConfig) -> Result<()> {
    let (contract, market, valuation_date) = args.contract.build()?;
    let model = config.pricing_model()?;

    info!(
        model = model.name(),
        valuation_date = %valuation_date,
        maturity_date = %contract.maturity_date(),
        "Pricing option"
    );

    let result = price_option(&contract, &market, &model, valuation_date)?;
    let report = PriceReport {
        model: model.name(),
        valuation_date,
        maturity_date: contract.maturity_date(),
        time_to_maturity: contract.time_to_maturity(valuation_date),
        result,
    };

    println!("{}", render(&report, args.option_type, config.format)?);
    Ok(())
}

/// Formats a report in the requested output format
pub fn render(
    report: &PriceReport,
    option_type: Option<OptionType>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = match option_type {
                Some(side) => serde_json::to_string_pretty(&report.side(side))?,
                None => serde_json::to_string_pretty(report)?,
            };
            Ok(json)
        }
        OutputFormat::Table => Ok(render_table_report(report, option_type)),
    }
}

fn render_table_report(report: &PriceReport, option_type: Option<OptionType>) -> String {
    let sides: Vec<OptionType> = match option_type {
        Some(side) => vec![side],
        None => vec![OptionType::Call, OptionType::Put],
    };
    let views: Vec<SideReport> = sides.iter().map(|&side| report.side(side)).collect();

    let mut header = vec![String::new()];
    header.extend(sides.iter().map(|side| match side {
        OptionType::Call => "Call".to_string(),
        OptionType::Put => "Put".to_string(),
    }));

    let row = |label: &str, value: &dyn Fn(&SideReport) -> Option<f64>| -> Option<Vec<String>> {
        let cells: Option<Vec<String>> = views
            .iter()
            .map(|view| value(view).map(|v| format!("{:.6}", v)))
            .collect();
        cells.map(|cells| std::iter::once(label.to_string()).chain(cells).collect())
    };

    let rows: Vec<Vec<String>> = [
        row("Price", &|v: &SideReport| Some(v.price)),
        row("Std error", &|v: &SideReport| v.std_error),
        row("Delta", &|v: &SideReport| v.greeks.map(|g| g.delta)),
        row("Gamma", &|v: &SideReport| v.greeks.map(|g| g.gamma)),
        row("Vega (1%)", &|v: &SideReport| v.greeks.map(|g| g.vega)),
        row("Theta (1d)", &|v: &SideReport| v.greeks.map(|g| g.theta)),
        row("Rho (1%)", &|v: &SideReport| v.greeks.map(|g| g.rho)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut out = format!(
        "Model: {}\nValuation date: {}\nMaturity date: {} ({:.4} years)\n",
        report.model, report.valuation_date, report.maturity_date, report.time_to_maturity
    );
    out.push_str(&render_table(&header, &rows));
    if report.result.greeks.is_none() {
        out.push_str("\nExpired: intrinsic prices, Greeks not available");
    }
    out
}
