//! CLI configuration management
//!
//! Loads settings from a TOML file, then `PRICER_*` environment variables,
//! then command-line flags, and validates the merged result.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, DEFAULT_PATHS, MAX_PATHS, MIN_PATHS};
use pricer_pricing::strategy::PricingModel;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown pricing model name
    #[error("Invalid model: {0}. Must be one of: analytic, monte-carlo")]
    InvalidModel(String),

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format
    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    /// Path count out of range
    #[error("Invalid path count: {0}. Must be between {min} and {max}", min = MIN_PATHS, max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Unreadable or malformed configuration file
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Pricing model selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// Closed-form Black-Scholes
    #[default]
    Analytic,
    /// Monte Carlo simulation
    MonteCarlo,
}

impl FromStr for ModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analytic" | "black-scholes" | "bs" => Ok(ModelKind::Analytic),
            "monte-carlo" | "montecarlo" | "mc" => Ok(ModelKind::MonteCarlo),
            _ => Err(ConfigError::InvalidModel(s.to_string())),
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Analytic => write!(f, "analytic"),
            ModelKind::MonteCarlo => write!(f, "monte-carlo"),
        }
    }
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Simulation and grid internals
    Debug,
    /// Progress messages
    Info,
    /// Warnings only
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `[monte_carlo]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Number of simulated paths
    pub paths: usize,
    /// Base seed
    pub seed: u64,
    /// Pair every draw with its negation
    pub antithetic: bool,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_PATHS,
            seed: 0,
            antithetic: true,
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Pricing model
    #[serde(deserialize_with = "deserialize_from_str")]
    pub model: ModelKind,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Monte Carlo settings
    pub monte_carlo: MonteCarloSettings,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// Overrides taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--model`
    pub model: Option<ModelKind>,
    /// `--format`
    pub format: Option<OutputFormat>,
    /// `--paths`
    pub paths: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--no-antithetic`
    pub no_antithetic: bool,
    /// `--verbose`
    pub verbose: bool,
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `PRICER_*` overrides from a variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("PRICER_MODEL") {
            self.model = model.parse()?;
        }
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }
        if let Some(format) = lookup("PRICER_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(paths) = lookup("PRICER_MC_PATHS") {
            self.monte_carlo.paths = parse_env("PRICER_MC_PATHS", &paths)?;
        }
        if let Some(seed) = lookup("PRICER_MC_SEED") {
            self.monte_carlo.seed = parse_env("PRICER_MC_SEED", &seed)?;
        }
        if let Some(antithetic) = lookup("PRICER_MC_ANTITHETIC") {
            self.monte_carlo.antithetic = parse_env("PRICER_MC_ANTITHETIC", &antithetic)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(model) = cli.model {
            self.model = model;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(paths) = cli.paths {
            self.monte_carlo.paths = paths;
        }
        if let Some(seed) = cli.seed {
            self.monte_carlo.seed = seed;
        }
        if cli.no_antithetic {
            self.monte_carlo.antithetic = false;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.monte_carlo_config().map(|_| ())
    }

    /// Simulation settings as an engine configuration
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(self.monte_carlo.paths)
            .seed(self.monte_carlo.seed)
            .antithetic(self.monte_carlo.antithetic)
            .build()
            .map_err(|_| ConfigError::InvalidPathCount(self.monte_carlo.paths))
    }

    /// Builds the configured pricing strategy
    pub fn pricing_model(&self) -> Result<PricingModel, ConfigError> {
        match self.model {
            ModelKind::Analytic => Ok(PricingModel::default()),
            ModelKind::MonteCarlo => {
                let pricer = MonteCarloPricer::new(self.monte_carlo_config()?)
                    .map_err(|_| ConfigError::InvalidPathCount(self.monte_carlo.paths))?;
                Ok(PricingModel::MonteCarlo(pricer))
            }
        }
    }

    /// Renders the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to render TOML: {}", e)))
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", key, value)))
}

/// Where the configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the given file
    File,
    /// File absent, built-in defaults used
    Defaults,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (skipped when absent)
/// 4. Default values
pub fn build_config(
    path: &Path,
    cli: &CliOverrides,
) -> Result<(PricerConfig, ConfigSource), ConfigError> {
    build_config_with_env(path, cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with `lookup` standing in for the process environment
pub fn build_config_with_env<F>(
    path: &Path,
    cli: &CliOverrides,
    lookup: F,
) -> Result<(PricerConfig, ConfigSource), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, source) = if path.exists() {
        (PricerConfig::from_file(path)?, ConfigSource::File)
    } else {
        (PricerConfig::default(), ConfigSource::Defaults)
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PricerConfig::default();
        assert_eq!(config.model, ModelKind::Analytic);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.monte_carlo.paths, DEFAULT_PATHS);
        assert_eq!(config.monte_carlo.seed, 0);
        assert!(config.monte_carlo.antithetic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_model_parsing() {
        let cases = [
            ("analytic", ModelKind::Analytic),
            ("Monte-Carlo", ModelKind::MonteCarlo),
            ("mc", ModelKind::MonteCarlo),
        ];
        for (name, expected) in cases {
            assert_eq!(ModelKind::from_str(name).unwrap(), expected);
        }
        assert!(ModelKind::from_str("binomial").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            model = "monte-carlo"
            log_level = "debug"
            format = "json"

            [monte_carlo]
            paths = 250000
            seed = 7
            antithetic = false
        "#;

        let config: PricerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, ModelKind::MonteCarlo);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.monte_carlo.paths, 250_000);
        assert_eq!(config.monte_carlo.seed, 7);
        assert!(!config.monte_carlo.antithetic);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: PricerConfig = toml::from_str("[monte_carlo]\nseed = 3\n").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.model, ModelKind::Analytic);
        assert_eq!(config.monte_carlo.paths, DEFAULT_PATHS);
        assert_eq!(config.monte_carlo.seed, 3);
    }

    #[test]
    fn test_toml_rejects_unknown_model() {
        let result: Result<PricerConfig, _> = toml::from_str("model = \"binomial\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PricerConfig::default();
        config.model = ModelKind::MonteCarlo;
        config.monte_carlo.seed = 11;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("model = \"monte-carlo\""));
        let parsed: PricerConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PricerConfig::default();
        config
            .apply_env_from(lookup(&[
                ("PRICER_MODEL", "mc"),
                ("PRICER_MC_PATHS", "5000"),
                ("PRICER_MC_ANTITHETIC", "false"),
            ]))
            .unwrap();

        assert_eq!(config.model, ModelKind::MonteCarlo);
        assert_eq!(config.monte_carlo.paths, 5_000);
        assert!(!config.monte_carlo.antithetic);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_env_rejects_malformed_values() {
        let mut config = PricerConfig::default();
        match config.apply_env_from(lookup(&[("PRICER_MC_SEED", "minus-one")])) {
            Err(ConfigError::EnvError(msg)) => assert!(msg.contains("PRICER_MC_SEED")),
            other => panic!("Expected EnvError, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = PricerConfig::default();
        let vars = lookup(&[("PRICER_FORMAT", "json"), ("PRICER_MC_SEED", "1")]);
        config.apply_env_from(vars).unwrap();

        config.merge_with_cli(&CliOverrides {
            format: Some(OutputFormat::Table),
            seed: Some(99),
            verbose: true,
            ..Default::default()
        });

        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.monte_carlo.seed, 99);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validate_path_count() {
        let mut config = PricerConfig::default();
        config.monte_carlo.paths = 1;
        match config.validate() {
            Err(ConfigError::InvalidPathCount(1)) => {}
            other => panic!("Expected InvalidPathCount, got {:?}", other),
        }

        config.monte_carlo.paths = MIN_PATHS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pricing_model_selection() {
        let mut config = PricerConfig::default();
        let model = config.pricing_model().unwrap();
        assert!(matches!(model, PricingModel::Analytic(_)));

        config.model = ModelKind::MonteCarlo;
        config.monte_carlo.paths = 20_000;
        match config.pricing_model().unwrap() {
            PricingModel::MonteCarlo(pricer) => assert_eq!(pricer.config().n_paths(), 20_000),
            other => panic!("Expected MonteCarlo, got {:?}", other),
        }
    }

    #[test]
    fn test_build_config_without_file() {
        let missing = Path::new("definitely-not-here/pricer.toml");
        let overrides = CliOverrides {
            model: Some(ModelKind::MonteCarlo),
            ..Default::default()
        };
        let (config, source) = build_config_with_env(missing, &overrides, lookup(&[])).unwrap();

        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.model, ModelKind::MonteCarlo);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_build_config_layers_env_under_cli() {
        let missing = Path::new("definitely-not-here/pricer.toml");
        let overrides = CliOverrides {
            model: Some(ModelKind::MonteCarlo),
            ..Default::default()
        };
        let vars = lookup(&[("PRICER_MODEL", "analytic"), ("PRICER_FORMAT", "json")]);
        let (config, _) = build_config_with_env(missing, &overrides, vars).unwrap();

        assert_eq!(config.model, ModelKind::MonteCarlo);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count"));

        let err = ConfigError::InvalidModel("bad".to_string());
        assert!(err.to_string().contains("Invalid model"));
    }
}
