//! Engine entry points.
//!
//! Two pure operations sit on top of the pricers:
//! - [`price`]: price via the selected model, Greeks always from the closed form
//! - [`implied_volatility`]: σ recovered from an observed price
//!
//! Neither validates its inputs. Callers reject non-finite values,
//! non-positive spot/strike and out-of-range step counts beforehand.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_core::types::{ExerciseStyle, PricingError};

use crate::analytical::{analytic_price, BlackScholes, Greeks};
use crate::implied::ImpliedVolSolver;
use crate::instruments::ContractParams;
use crate::lattice::BinomialTree;

/// Default lattice depth when a model is named without a step count.
pub const DEFAULT_STEPS: usize = 200;

/// Pricing model selection.
///
/// # Examples
/// ```
/// use pricer_models::engine::PricingModel;
///
/// let model: PricingModel = "lattice-american".parse().unwrap();
/// assert_eq!(model.with_steps(500), PricingModel::BinomialAmerican { steps: 500 });
///
/// // Legacy identifiers are still understood
/// assert_eq!("bs_euro".parse::<PricingModel>().unwrap(), PricingModel::Analytic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PricingModel {
    /// Closed-form Black-Scholes-Merton (European only)
    #[default]
    Analytic,
    /// CRR tree, European exercise
    BinomialEuropean {
        /// Number of time steps
        steps: usize,
    },
    /// CRR tree, American exercise
    BinomialAmerican {
        /// Number of time steps
        steps: usize,
    },
}

impl PricingModel {
    /// Canonical identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PricingModel::Analytic => "analytic",
            PricingModel::BinomialEuropean { .. } => "lattice-european",
            PricingModel::BinomialAmerican { .. } => "lattice-american",
        }
    }

    /// Lattice depth, `None` for the closed form.
    pub fn steps(&self) -> Option<usize> {
        match *self {
            PricingModel::Analytic => None,
            PricingModel::BinomialEuropean { steps } | PricingModel::BinomialAmerican { steps } => {
                Some(steps)
            }
        }
    }

    /// Returns a copy with a different lattice depth. No-op for the closed form.
    pub fn with_steps(self, steps: usize) -> Self {
        match self {
            PricingModel::Analytic => PricingModel::Analytic,
            PricingModel::BinomialEuropean { .. } => PricingModel::BinomialEuropean { steps },
            PricingModel::BinomialAmerican { .. } => PricingModel::BinomialAmerican { steps },
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.steps() {
            Some(steps) => write!(f, "{} ({} steps)", self.name(), steps),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for PricingModel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analytic" | "bs_euro" => Ok(PricingModel::Analytic),
            "lattice-european" | "binom_euro" => Ok(PricingModel::BinomialEuropean {
                steps: DEFAULT_STEPS,
            }),
            "lattice-american" | "binom_amer" => Ok(PricingModel::BinomialAmerican {
                steps: DEFAULT_STEPS,
            }),
            other => Err(PricingError::UnsupportedInstrument(format!(
                "Unknown pricing model: {}",
                other
            ))),
        }
    }
}

/// Price plus the analytic Greek vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation<T: Float> {
    /// Option price under the selected model
    pub price: T,
    /// Closed-form sensitivities
    pub greeks: Greeks<T>,
}

/// Prices a contract.
///
/// The model only selects how the price is computed; Greeks always come
/// from the closed form, for lattice models too.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
/// use pricer_models::engine::{price, PricingModel};
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::new(100.0_f64, 90.0, 0.05, 0.0, 0.0, 1.0, OptionRight::Call);
/// let valuation = price(&params, PricingModel::Analytic);
/// assert_eq!(valuation.price, 10.0);
/// assert_eq!(valuation.greeks.delta, 1.0);
/// ```
pub fn price<T: Float>(params: &ContractParams<T>, model: PricingModel) -> Valuation<T> {
    let value = match model {
        PricingModel::Analytic => analytic_price(params),
        PricingModel::BinomialEuropean { steps } => {
            BinomialTree::new(steps, ExerciseStyle::European).price(params)
        }
        PricingModel::BinomialAmerican { steps } => {
            BinomialTree::new(steps, ExerciseStyle::American).price(params)
        }
    };

    Valuation {
        price: value,
        greeks: BlackScholes::new(*params).greeks(),
    }
}

/// Implied volatility with the default solver settings.
///
/// Returns a value in `(0, 5.0]`; when the solver does not converge this
/// is a clamped best-effort estimate. Use
/// [`ImpliedVolSolver`] directly to inspect convergence.
pub fn implied_volatility<T: Float>(observed: T, params: &ContractParams<T>) -> T {
    ImpliedVolSolver::default().solve(observed, params).volatility
}
