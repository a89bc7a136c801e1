//! Implied volatility command implementation
//!
//! Inverts the closed-form price. Out-of-range quotes still produce a
//! clamped best-effort estimate unless `--strict` is given.

use clap::Args;
use pricer_core::types::{OptionRight, PricingError};
use pricer_models::implied::{ImpliedVol, ImpliedVolSolver};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, key_value_table, Report};
use crate::request::{validate_observed_price, ContractArgs};
use crate::Result;

/// Arguments of `optionlab implied-vol`
#[derive(Debug, Clone, Args)]
pub struct ImpliedVolArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Observed option price
    #[arg(long)]
    pub price: f64,

    /// Fail instead of reporting a non-converged estimate
    #[arg(long)]
    pub strict: bool,
}

/// Result of `optionlab implied-vol`
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedVolReport {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub expiry: f64,
    pub right: OptionRight,
    pub observed_price: f64,
    #[serde(flatten)]
    pub result: ImpliedVol<f64>,
}

impl Report for ImpliedVolReport {
    fn to_table(&self) -> String {
        key_value_table(&[
            ("Right", self.right.to_string()),
            ("Observed price", format!("{:.6}", self.observed_price)),
            ("Implied vol", format!("{:.6}", self.result.volatility)),
            ("Method", self.result.method.to_string()),
            ("Iterations", self.result.iterations.to_string()),
            ("Converged", self.result.converged.to_string()),
        ])
    }
}

/// Validate inputs and solve for volatility
pub fn execute(args: &ImpliedVolArgs) -> Result<ImpliedVolReport> {
    let observed = validate_observed_price(args.price)?;
    // Volatility is the unknown; any valid placeholder passes validation
    let params = args.contract.to_params(0.0)?;

    info!(observed, right = %params.right, "Solving for implied volatility");
    let result = ImpliedVolSolver::default().solve(observed, &params);
    if args.strict {
        result.into_result().map_err(PricingError::from)?;
    }
    info!(
        volatility = result.volatility,
        method = %result.method,
        converged = result.converged,
        "Implied volatility solved"
    );

    Ok(ImpliedVolReport {
        spot: params.spot,
        strike: params.strike,
        rate: params.rate,
        dividend_yield: params.dividend_yield,
        expiry: params.expiry,
        right: params.right,
        observed_price: observed,
        result,
    })
}

/// Run the implied-vol command
pub fn run(args: &ImpliedVolArgs, config: &CliConfig) -> Result<()> {
    let report = execute(args)?;
    output::emit(&report, config.output_format)
}
