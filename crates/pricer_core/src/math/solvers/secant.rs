//! Secant-method root finder for problems without a known bracket.

use super::{RootEstimate, SolverConfig};
use num_traits::Float;

/// Default threshold below which `|f(x1) - f(x0)|` is treated as zero.
const DEFAULT_MIN_DENOMINATOR: f64 = 1e-12;

/// Two-point secant iteration.
///
/// `x2 = x1 - f(x1)·(x1 - x0) / (f(x1) - f(x0))`
///
/// Stops as soon as `|f(x2)| < tolerance`. There is no convergence
/// guarantee: when the slope degenerates or the budget runs out, the last
/// iterate is returned with `converged = false`. Non-positive iterates are
/// replaced with a configurable positive `floor`, which keeps the search
/// on the positive half-line (volatilities, rates of growth, etc.).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{SecantSolver, SolverConfig};
///
/// let solver = SecantSolver::new(SolverConfig::new(1e-12, 50));
/// let estimate = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0);
/// assert!(estimate.converged);
/// assert!((estimate.root - 2.0_f64.ln()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    config: SolverConfig<T>,
    floor: T,
    min_denominator: T,
}

impl<T: Float> SecantSolver<T> {
    /// Create a secant solver. The floor defaults to the smallest positive
    /// normal value of `T`, the degeneracy threshold to 1e-12.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            floor: T::min_positive_value(),
            min_denominator: T::from(DEFAULT_MIN_DENOMINATOR).unwrap(),
        }
    }

    /// Replace non-positive iterates with `floor` instead.
    pub fn with_floor(mut self, floor: T) -> Self {
        self.floor = floor;
        self
    }

    /// Treat slopes with magnitude below `threshold` as degenerate.
    pub fn with_min_denominator(mut self, threshold: T) -> Self {
        self.min_denominator = threshold;
        self
    }

    /// Iterate from the starting pair `(x0, x1)`.
    pub fn find_root<F>(&self, f: F, x0: T, x1: T) -> RootEstimate<T>
    where
        F: Fn(T) -> T,
    {
        let (mut x0, mut f0) = (x0, f(x0));
        let (mut x1, mut f1) = (x1, f(x1));

        for iteration in 0..self.config.max_iterations {
            let slope = f1 - f0;
            if slope.abs() < self.min_denominator {
                return RootEstimate::stalled(x1, f1, iteration);
            }

            let mut x2 = x1 - f1 * (x1 - x0) / slope;
            if x2 <= T::zero() {
                x2 = self.floor;
            }

            let f2 = f(x2);
            if f2.abs() < self.config.tolerance {
                return RootEstimate::converged(x2, f2, iteration + 1);
            }

            x0 = x1;
            f0 = f1;
            x1 = x2;
            f1 = f2;
        }

        RootEstimate::best_effort(x1, f1, self.config.max_iterations)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the positive floor substituted for non-positive iterates.
    pub fn floor(&self) -> T {
        self.floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> SecantSolver<f64> {
        SecantSolver::new(SolverConfig::new(1e-12, 50)).with_floor(1e-6)
    }

    #[test]
    fn test_find_sqrt_2() {
        let estimate = solver().find_root(|x: f64| x * x - 2.0, 1.0, 2.0);
        assert!(estimate.converged);
        assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_linear_converges_in_one_step() {
        let estimate = solver().find_root(|x: f64| x - 1.0, 3.0, 2.0);
        assert!(estimate.converged);
        assert_eq!(estimate.iterations, 1);
        assert!((estimate.root - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_iterate_is_floored() {
        // Root at x = -1 lies outside the positive half-line
        let estimate = solver().find_root(|x: f64| x * x + 1.0, 1.0, 2.0);
        assert!(!estimate.converged);
        assert_eq!(estimate.root, 1e-6);
    }

    #[test]
    fn test_flat_function_stops_immediately() {
        let estimate = solver().find_root(|_x: f64| 5.0, 1.0, 2.0);
        assert!(!estimate.converged);
        assert!(estimate.stalled);
        assert_eq!(estimate.iterations, 0);
        assert_eq!(estimate.root, 2.0);
        assert_eq!(estimate.residual, 5.0);
    }

    #[test]
    fn test_min_denominator_threshold() {
        // Slope of 1e-9 between the start points: degenerate under a 1e-6 threshold
        let f = |x: f64| 1e-9 * x + 1.0;
        let estimate = solver().with_min_denominator(1e-6).find_root(f, 1.0, 2.0);
        assert!(!estimate.converged);
        assert_eq!(estimate.iterations, 0);
    }

    #[test]
    fn test_budget_exhausted() {
        let solver = SecantSolver::new(SolverConfig::new(1e-300, 2));
        let estimate = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0);
        assert!(!estimate.converged);
        assert!(!estimate.stalled);
        assert_eq!(estimate.iterations, 2);
    }

    #[test]
    fn test_default_floor_is_positive() {
        let solver: SecantSolver<f64> = SecantSolver::new(SolverConfig::default());
        assert!(solver.floor() > 0.0);
        assert_eq!(solver.config().max_iterations, 100);
    }
}
