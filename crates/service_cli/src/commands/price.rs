//! Price command implementation
//!
//! Prices one contract with the selected model and reports the closed-form
//! Greeks alongside.

use clap::Args;
use pricer_models::engine::{self, PricingModel, Valuation};
use pricer_models::instruments::ContractParams;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{self, key_value_table, Report};
use crate::request::{validate_steps, ContractArgs};
use crate::Result;

/// Arguments of `optionlab price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Volatility, annualised (e.g. 0.2)
    #[arg(long)]
    pub vol: f64,

    /// Pricing model (analytic, lattice-european, lattice-american)
    #[arg(short, long, default_value = "analytic")]
    pub model: PricingModel,

    /// Lattice steps [default: configured default_steps]
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,
}

/// Result of `optionlab price`
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub model: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    pub contract: ContractParams<f64>,
    #[serde(flatten)]
    pub valuation: Valuation<f64>,
}

impl Report for PriceReport {
    fn to_table(&self) -> String {
        let g = &self.valuation.greeks;
        let mut rows = vec![("Model", self.model.to_string())];
        if let Some(steps) = self.steps {
            rows.push(("Steps", steps.to_string()));
        }
        rows.extend([
            ("Right", self.contract.right.to_string()),
            ("Price", format!("{:.6}", self.valuation.price)),
            ("Delta", format!("{:.6}", g.delta)),
            ("Gamma", format!("{:.6}", g.gamma)),
            ("Vega", format!("{:.6}", g.vega)),
            ("Theta", format!("{:.6}", g.theta)),
            ("Rho", format!("{:.6}", g.rho)),
        ]);
        key_value_table(&rows)
    }
}

/// Validate inputs and price the contract
pub fn execute(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let params = args.contract.to_params(args.vol)?;

    let model = match args.model {
        PricingModel::Analytic => {
            if args.steps.is_some() {
                warn!("--steps is ignored by the analytic model");
            }
            PricingModel::Analytic
        }
        lattice => {
            let steps = validate_steps(args.steps.unwrap_or(config.default_steps), config.max_steps)?;
            lattice.with_steps(steps)
        }
    };

    info!(model = %model, right = %params.right, "Pricing contract");
    let valuation = engine::price(&params, model);
    info!(price = valuation.price, "Pricing complete");

    Ok(PriceReport {
        model: model.name(),
        steps: model.steps(),
        contract: params,
        valuation,
    })
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let report = execute(args, config)?;
    output::emit(&report, config.output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionRight;

    fn args(model: PricingModel, steps: Option<usize>) -> PriceArgs {
        PriceArgs {
            contract: ContractArgs {
                spot: 100.0,
                strike: 100.0,
                rate: 0.05,
                dividend_yield: 0.0,
                expiry: 1.0,
                right: OptionRight::Put,
            },
            vol: 0.3,
            model,
            steps,
        }
    }

    #[test]
    fn test_analytic_price() {
        let report = execute(&args(PricingModel::Analytic, None), &CliConfig::default()).unwrap();
        assert_eq!(report.model, "analytic");
        assert_eq!(report.steps, None);
        assert!(report.valuation.price > 0.0);
        assert!(report.valuation.greeks.delta < 0.0);
    }

    #[test]
    fn test_lattice_uses_configured_default_steps() {
        let config = CliConfig {
            default_steps: 200,
            ..Default::default()
        };
        let model = PricingModel::BinomialAmerican { steps: 1 };
        let report = execute(&args(model, None), &config).unwrap();
        assert_eq!(report.model, "lattice-american");
        assert_eq!(report.steps, Some(200));
        assert_relative_eq!(report.valuation.price, 9.8632, epsilon = 1e-3);
    }

    #[test]
    fn test_steps_above_max_rejected() {
        let config = CliConfig {
            max_steps: 100,
            default_steps: 50,
            ..Default::default()
        };
        let model = PricingModel::BinomialEuropean { steps: 200 };
        let result = execute(&args(model, Some(101)), &config);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let model = PricingModel::BinomialEuropean { steps: 200 };
        let result = execute(&args(model, Some(0)), &CliConfig::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_spot_rejected() {
        let mut bad = args(PricingModel::Analytic, None);
        bad.contract.spot = -1.0;
        assert!(matches!(
            execute(&bad, &CliConfig::default()),
            Err(CliError::Instrument(_))
        ));
    }

    #[test]
    fn test_json_report_shape() {
        let report = execute(&args(PricingModel::Analytic, None), &CliConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model"], "analytic");
        assert_eq!(json["contract"]["right"], "put");
        assert!(json["price"].is_number());
        assert!(json["greeks"]["gamma"].is_number());
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_table_lists_greeks() {
        let report = execute(&args(PricingModel::Analytic, None), &CliConfig::default()).unwrap();
        let table = report.to_table();
        for label in ["Price", "Delta", "Gamma", "Vega", "Theta", "Rho"] {
            assert!(table.contains(label), "missing {}", label);
        }
    }
}
