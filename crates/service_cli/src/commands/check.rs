//! Check command implementation
//!
//! Prints the effective configuration after file, environment and flag
//! overrides have been merged.

use std::path::Path;

use pricer_core::traits::PricingStrategy;

use crate::config::{ConfigSource, OutputFormat, PricerConfig};
use crate::Result;

/// Run the check command
pub fn run(config: &PricerConfig, path: &Path, source: ConfigSource) -> Result<()> {
    println!("{}", render(config, path, source)?);
    Ok(())
}

/// Formats the effective configuration
pub fn render(config: &PricerConfig, path: &Path, source: ConfigSource) -> Result<String> {
    // Building the strategy exercises the same validation as pricing
    let model = config.pricing_model()?;

    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Table => {
            let status = match source {
                ConfigSource::File => "loaded",
                ConfigSource::Defaults => "not found, using defaults",
            };
            Ok(format!(
                "pricer {}\nConfiguration file: {} ({})\nStrategy: {}\n\n{}",
                env!("CARGO_PKG_VERSION"),
                path.display(),
                status,
                model.name(),
                config.to_toml()?
            ))
        }
    }
}
