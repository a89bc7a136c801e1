//! Chain command implementation
//!
//! Generates a synthetic chain of European calls and puts across a strike
//! ladder, then inverts each price back to an implied volatility. Rows are
//! independent and are built in parallel.

use clap::Args;
use pricer_core::types::OptionRight;
use pricer_models::analytical::analytic_price;
use pricer_models::implied::ImpliedVolSolver;
use pricer_models::instruments::ContractParams;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{self, grid_table, Report};
use crate::request::round_to;
use crate::Result;

const DAYS_PER_YEAR: f64 = 365.0;

/// Arguments of `optionlab chain`
#[derive(Debug, Clone, Args)]
pub struct ChainArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Continuously-compounded risk-free rate
    #[arg(long, default_value_t = 0.02, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend / carry yield
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend_yield: f64,

    /// Flat volatility used to price every strike
    #[arg(long, default_value_t = 0.3)]
    pub vol: f64,

    /// Calendar days to expiry; values below 1 count as 1
    #[arg(long, default_value_t = 30, allow_hyphen_values = true)]
    pub days: i64,
}

/// One strike of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainRow {
    pub strike: f64,
    pub call: f64,
    pub put: f64,
    pub iv_call: f64,
    pub iv_put: f64,
}

/// Result of `optionlab chain`
#[derive(Debug, Clone, Serialize)]
pub struct ChainReport {
    pub spot: f64,
    pub days: i64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub volatility: f64,
    pub rows: Vec<ChainRow>,
}

impl Report for ChainReport {
    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    format!("{:.2}", row.strike),
                    format!("{:.4}", row.call),
                    format!("{:.4}", row.put),
                    format!("{:.4}", row.iv_call),
                    format!("{:.4}", row.iv_put),
                ]
            })
            .collect();
        grid_table(&["Strike", "Call", "Put", "IV Call", "IV Put"], &rows)
    }
}

/// Strike ladder `spot * (start + step * i)`, rounded to cents.
pub fn strike_ladder(spot: f64, config: &CliConfig) -> Vec<f64> {
    (0..config.chain_strikes)
        .map(|i| {
            let moneyness = config.chain_start_moneyness + config.chain_moneyness_step * i as f64;
            round_to(spot * moneyness, 2)
        })
        .collect()
}

fn chain_row(base: &ContractParams<f64>, strike: f64, solver: &ImpliedVolSolver<f64>) -> Result<ChainRow> {
    let call = base.with_strike(strike);
    call.validate()?;
    let put = call.with_right(OptionRight::Put);

    let call_price = analytic_price(&call);
    let put_price = analytic_price(&put);
    let iv_call = solver.solve(call_price, &call).volatility;
    let iv_put = solver.solve(put_price, &put).volatility;
    debug!(strike, call_price, put_price, iv_call, iv_put, "Chain row");

    Ok(ChainRow {
        strike,
        call: round_to(call_price, 4),
        put: round_to(put_price, 4),
        iv_call: round_to(iv_call, 4),
        iv_put: round_to(iv_put, 4),
    })
}

/// Validate inputs and build the chain
pub fn execute(args: &ChainArgs, config: &CliConfig) -> Result<ChainReport> {
    let expiry = args.days.max(1) as f64 / DAYS_PER_YEAR;
    let base = ContractParams::new(
        args.spot,
        args.spot,
        args.rate,
        args.dividend_yield,
        args.vol,
        expiry,
        OptionRight::Call,
    );
    base.validate()?;

    info!(
        spot = args.spot,
        days = args.days,
        strikes = config.chain_strikes,
        "Generating option chain"
    );
    let solver = ImpliedVolSolver::default();
    let rows = strike_ladder(args.spot, config)
        .into_par_iter()
        .map(|strike| chain_row(&base, strike, &solver))
        .collect::<Result<Vec<_>>>()?;
    info!(rows = rows.len(), "Chain complete");

    Ok(ChainReport {
        spot: args.spot,
        days: args.days,
        rate: args.rate,
        dividend_yield: args.dividend_yield,
        volatility: args.vol,
        rows,
    })
}

/// Run the chain command
pub fn run(args: &ChainArgs, config: &CliConfig) -> Result<()> {
    let report = execute(args, config)?;
    output::emit(&report, config.output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn args(days: i64) -> ChainArgs {
        ChainArgs {
            spot: 100.0,
            rate: 0.02,
            dividend_yield: 0.0,
            vol: 0.3,
            days,
        }
    }

    #[test]
    fn test_default_strike_ladder() {
        let strikes = strike_ladder(100.0, &CliConfig::default());
        assert_eq!(strikes.len(), 16);
        assert_eq!(strikes[0], 60.0);
        assert_eq!(strikes[1], 65.0);
        assert_eq!(strikes[15], 135.0);
    }

    #[test]
    fn test_ladder_rounds_to_cents() {
        let strikes = strike_ladder(123.456, &CliConfig::default());
        for k in strikes {
            assert_relative_eq!(k, round_to(k, 2));
        }
    }

    #[test]
    fn test_chain_recovers_flat_volatility() {
        let report = execute(&args(30), &CliConfig::default()).unwrap();
        assert_eq!(report.rows.len(), 16);

        // Keeps ladder order under parallel collection
        let strikes: Vec<f64> = report.rows.iter().map(|r| r.strike).collect();
        assert_eq!(strikes, strike_ladder(100.0, &CliConfig::default()));

        // Deep wings carry no vega at 30 days; check the central strikes
        for row in report.rows.iter().filter(|r| (85.0..=115.0).contains(&r.strike)) {
            assert_relative_eq!(row.iv_call, 0.3, epsilon = 1e-3);
            assert_relative_eq!(row.iv_put, 0.3, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_chain_prices_are_monotonic_in_strike() {
        let report = execute(&args(90), &CliConfig::default()).unwrap();
        for pair in report.rows.windows(2) {
            assert!(pair[1].call <= pair[0].call);
            assert!(pair[1].put >= pair[0].put);
        }
    }

    #[test]
    fn test_days_below_one_clamped() {
        let zero = execute(&args(0), &CliConfig::default()).unwrap();
        let one = execute(&args(1), &CliConfig::default()).unwrap();
        assert_eq!(zero.rows, one.rows);
        assert_eq!(zero.days, 0);
    }

    #[test]
    fn test_invalid_spot_rejected() {
        let bad = ChainArgs {
            spot: 0.0,
            ..args(30)
        };
        assert!(matches!(
            execute(&bad, &CliConfig::default()),
            Err(CliError::Instrument(_))
        ));
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let report = execute(&args(30), &CliConfig::default()).unwrap();
        let table = report.to_table();
        assert!(table.contains("IV Call"));
        // Top rule, header, separator, 16 rows, bottom rule
        assert_eq!(table.lines().count(), 20);
    }
}
