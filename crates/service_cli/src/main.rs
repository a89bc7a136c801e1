//! optionlab - command-line vanilla option pricing
//!
//! # Commands
//!
//! - `optionlab price` - Price one contract (closed form or CRR lattice) with Greeks
//! - `optionlab implied-vol --price <p>` - Recover volatility from an observed price
//! - `optionlab chain --spot <s>` - Synthetic chain of calls and puts with implied vols
//!
//! # Configuration
//!
//! Settings are layered CLI flags > `OPTIONLAB_*` environment variables >
//! `optionlab.toml` > built-in defaults. Logs go to stderr; results go to
//! stdout as a table or as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;
mod request;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel, OutputFormat};

/// Vanilla option pricing CLI
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: ./optionlab.toml when present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European or American vanilla option
    Price(commands::price::PriceArgs),

    /// Recover implied volatility from an observed option price
    ImpliedVol(commands::implied_vol::ImpliedVolArgs),

    /// Generate a synthetic option chain across a strike ladder
    Chain(commands::chain::ChainArgs),
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let log_level = match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level),
            (None, true) => Some(LogLevel::Debug),
            (None, false) => None,
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level,
            output_format: self.format,
        }
    }
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
    }
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level);
    info!("optionlab v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::ImpliedVol(args) => commands::implied_vol::run(args, &config),
        Commands::Chain(args) => commands::chain::run(args, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
