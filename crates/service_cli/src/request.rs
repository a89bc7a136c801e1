//! Request arguments and caller-side validation.
//!
//! The engine accepts whatever it is given; everything that must be
//! rejected up front (non-finite values, non-positive spot/strike,
//! out-of-range step counts) is checked here.

use clap::Args;
use pricer_core::types::OptionRight;
use pricer_models::instruments::ContractParams;

use crate::{CliError, Result};

/// Contract fields shared by `price` and `implied-vol`.
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Continuously-compounded risk-free rate (e.g. 0.05)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend / carry yield
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend_yield: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Option right (call, put)
    #[arg(long)]
    pub right: OptionRight,
}

impl ContractArgs {
    /// Builds validated contract parameters with the given volatility.
    pub fn to_params(&self, volatility: f64) -> Result<ContractParams<f64>> {
        let params = ContractParams::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend_yield,
            volatility,
            self.expiry,
            self.right,
        );
        params.validate()?;
        Ok(params)
    }
}

/// Checks `1 <= steps <= max_steps`.
pub fn validate_steps(steps: usize, max_steps: usize) -> Result<usize> {
    if steps == 0 || steps > max_steps {
        return Err(CliError::InvalidArgument(format!(
            "steps must be in 1..={}, got {}",
            max_steps, steps
        )));
    }
    Ok(steps)
}

/// Checks that an observed option price is finite and non-negative.
pub fn validate_observed_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "observed price must be finite and >= 0, got {}",
            price
        )));
    }
    Ok(price)
}

/// Rounds to `places` decimal places.
///
/// Goes through the correctly-rounded decimal formatter, so exact ties
/// round half to even (`0.125` -> `0.12`) and no error creeps in from
/// scaling by a power of ten.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
