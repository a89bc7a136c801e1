//! Implied volatility by inversion of the analytic pricer.
//!
//! The objective is `f(σ) = price(σ) - observed`. An upfront sign test on
//! `[lower, upper]` picks the algorithm:
//!
//! - bracketed: Brent's method on `[lower, upper]`
//! - not bracketed: secant iteration from `secant_start`, non-positive
//!   iterates floored at `lower`
//!
//! Which branch runs is observable through [`ImpliedVol::method`]. Deep
//! out-of-the-money quotes that do not bracket a root deterministically
//! take the secant path and may come back as a best-effort estimate.

use std::fmt;

use num_traits::Float;
use pricer_core::math::solvers::{BrentSolver, RootEstimate, SecantSolver, SolverConfig};
use pricer_core::types::SolverError;
use tracing::{debug, warn};

use crate::analytical::analytic_price;
use crate::instruments::ContractParams;

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig<T: Float> {
    /// Lower end of the volatility domain (default 1e-6).
    pub lower: T,
    /// Upper end of the volatility domain (default 5.0).
    pub upper: T,
    /// Brent: bracket half-width; secant: `|f(σ)|` (default 1e-6).
    pub tolerance: T,
    /// Iteration budget for either branch (default 120).
    pub max_iterations: usize,
    /// Starting pair for the secant fallback (default (0.2, 0.5)).
    pub secant_start: (T, T),
    /// Secant slopes below this magnitude stop the iteration (default 1e-12).
    pub degenerate_denominator: T,
}

impl<T: Float> Default for ImpliedVolConfig<T> {
    fn default() -> Self {
        Self {
            lower: T::from(1e-6).unwrap(),
            upper: T::from(5.0).unwrap(),
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 120,
            secant_start: (T::from(0.2).unwrap(), T::from(0.5).unwrap()),
            degenerate_denominator: T::from(1e-12).unwrap(),
        }
    }
}

/// Which algorithm produced an [`ImpliedVol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolveMethod {
    /// Bracketed Brent iteration
    Brent,
    /// Unbracketed secant fallback
    Secant,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Brent => write!(f, "brent"),
            SolveMethod::Secant => write!(f, "secant"),
        }
    }
}

/// Implied volatility together with solver diagnostics.
///
/// `volatility` always lies in `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVol<T: Float> {
    /// Implied volatility, clamped to the solver domain
    pub volatility: T,
    /// Branch that produced the value
    pub method: SolveMethod,
    /// Iterations consumed by that branch
    pub iterations: usize,
    /// Whether the stopping criterion was met
    pub converged: bool,
    /// Whether the secant slope collapsed before convergence
    pub stalled: bool,
    /// Objective `price(σ) - observed` at the last unclamped iterate
    pub residual: T,
}

impl<T: Float> ImpliedVol<T> {
    fn from_estimate(estimate: RootEstimate<T>, method: SolveMethod) -> Self {
        Self {
            volatility: estimate.root,
            method,
            iterations: estimate.iterations,
            converged: estimate.converged,
            stalled: estimate.stalled,
            residual: estimate.residual,
        }
    }

    fn as_estimate(&self) -> RootEstimate<T> {
        RootEstimate {
            root: self.volatility,
            residual: self.residual,
            iterations: self.iterations,
            converged: self.converged,
            stalled: self.stalled,
        }
    }

    /// Rejects best-effort estimates.
    ///
    /// # Errors
    /// - [`SolverError::DegenerateDenominator`] when the secant slope collapsed
    /// - [`SolverError::MaxIterationsExceeded`] when the budget ran out
    pub fn into_result(self) -> Result<T, SolverError> {
        self.as_estimate().into_result().map(|estimate| estimate.root)
    }
}

#[inline]
fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Brent-with-secant-fallback implied volatility solver.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
/// use pricer_models::analytical::analytic_price;
/// use pricer_models::implied::{ImpliedVolSolver, SolveMethod};
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::new(100.0_f64, 100.0, 0.05, 0.0, 0.25, 1.0, OptionRight::Call);
/// let observed = analytic_price(&params);
///
/// let result = ImpliedVolSolver::default().solve(observed, &params);
/// assert_eq!(result.method, SolveMethod::Brent);
/// assert!((result.volatility - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    config: ImpliedVolConfig<T>,
}

impl<T: Float> Default for ImpliedVolSolver<T> {
    fn default() -> Self {
        Self::new(ImpliedVolConfig::default())
    }
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Creates a solver with the given configuration.
    pub fn new(config: ImpliedVolConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig<T> {
        &self.config
    }

    fn solver_config(&self) -> SolverConfig<T> {
        SolverConfig::new(self.config.tolerance, self.config.max_iterations)
    }

    /// Recovers σ from `observed`. The `volatility` field of `params` is
    /// ignored.
    ///
    /// Never fails: a non-converged result is still a clamped estimate.
    pub fn solve(&self, observed: T, params: &ContractParams<T>) -> ImpliedVol<T> {
        let result = match self.solve_bracketed(observed, params) {
            Ok(result) => result,
            Err(err) => {
                debug!(
                    observed = as_f64(observed),
                    reason = %err,
                    "Implied vol not bracketed, falling back to secant"
                );
                self.solve_unbracketed(observed, params)
            }
        };

        if !result.converged {
            warn!(
                observed = as_f64(observed),
                volatility = as_f64(result.volatility),
                method = %result.method,
                iterations = result.iterations,
                "Implied vol did not converge, returning best-effort estimate"
            );
        }
        result
    }

    /// Brent's method on `[lower, upper]`.
    ///
    /// # Errors
    /// [`SolverError::NoBracket`] when `f(lower)` and `f(upper)` share a sign.
    pub fn solve_bracketed(
        &self,
        observed: T,
        params: &ContractParams<T>,
    ) -> Result<ImpliedVol<T>, SolverError> {
        let objective = |sigma: T| analytic_price(&params.with_volatility(sigma)) - observed;
        let estimate = BrentSolver::new(self.solver_config()).find_root(
            objective,
            self.config.lower,
            self.config.upper,
        )?;

        debug!(
            volatility = as_f64(estimate.root),
            iterations = estimate.iterations,
            "Implied vol solved by Brent"
        );
        Ok(ImpliedVol::from_estimate(
            estimate.clamped(self.config.lower, self.config.upper),
            SolveMethod::Brent,
        ))
    }

    /// Secant iteration from `secant_start`; best effort.
    pub fn solve_unbracketed(&self, observed: T, params: &ContractParams<T>) -> ImpliedVol<T> {
        let objective = |sigma: T| analytic_price(&params.with_volatility(sigma)) - observed;
        let (x0, x1) = self.config.secant_start;
        let estimate = SecantSolver::new(self.solver_config())
            .with_floor(self.config.lower)
            .with_min_denominator(self.config.degenerate_denominator)
            .find_root(objective, x0, x1);

        debug!(
            volatility = as_f64(estimate.root),
            iterations = estimate.iterations,
            converged = estimate.converged,
            "Implied vol secant fallback finished"
        );
        ImpliedVol::from_estimate(
            estimate.clamped(self.config.lower, self.config.upper),
            SolveMethod::Secant,
        )
    }
}
