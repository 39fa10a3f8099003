//! Option pricer CLI
//!
//! Command-line entry point for the option pricing engine.
//!
//! # Commands
//!
//! - `pricer price` - Price a European call/put pair and its Greeks
//! - `pricer grid` - Sweep two inputs and print a price matrix
//! - `pricer check` - Show the effective configuration
//!
//! # Configuration
//!
//! Settings are read from `pricer.toml` (or `--config <file>`) when present,
//! then overridden by `PRICER_*` environment variables, then by flags.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the pricing crates to
//! the command line and owns the only call to `Date::today()`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::check;
use commands::grid::{self, GridArgs};
use commands::price::{self, PriceArgs};
use commands::ModelArgs;
use config::build_config;

/// European option pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call/put pair
    Price(PriceArgs),

    /// Compute a two-dimensional sensitivity grid
    Grid(GridArgs),

    /// Show the effective configuration
    Check(ModelArgs),
}

impl Commands {
    fn model_args(&self) -> &ModelArgs {
        match self {
            Commands::Price(args) => &args.model,
            Commands::Grid(args) => &args.model,
            Commands::Check(args) => args,
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let overrides = cli.command.model_args().overrides(cli.verbose);
    let (config, source) = build_config(&cli.config, &overrides)?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        config_file = %cli.config.display(),
        model = %config.model,
        format = %config.format,
        paths = config.monte_carlo.paths,
        seed = config.monte_carlo.seed,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price(args) => price::run(args, &config),
        Commands::Grid(args) => grid::run(args, &config),
        Commands::Check(_) => check::run(&config, &cli.config, source),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
