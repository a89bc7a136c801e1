//! Best-effort solver output.

use crate::types::SolverError;
use num_traits::Float;

/// Result of a root search.
///
/// Solvers always hand back their last iterate; `converged` records
/// whether the stopping criterion was met within the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate<T: Float> {
    /// Final iterate.
    pub root: T,
    /// `f(root)` as last evaluated.
    pub residual: T,
    /// Iterations consumed.
    pub iterations: usize,
    /// Whether the solver's stopping criterion was satisfied.
    pub converged: bool,
    /// Whether the iteration stopped early on a degenerate step.
    pub stalled: bool,
}

impl<T: Float> RootEstimate<T> {
    /// An estimate that met the stopping criterion.
    pub fn converged(root: T, residual: T, iterations: usize) -> Self {
        Self {
            root,
            residual,
            iterations,
            converged: true,
            stalled: false,
        }
    }

    /// An estimate returned after the iteration budget ran out.
    pub fn best_effort(root: T, residual: T, iterations: usize) -> Self {
        Self {
            root,
            residual,
            iterations,
            converged: false,
            stalled: false,
        }
    }

    /// An estimate returned because the next step could not be formed.
    pub fn stalled(root: T, residual: T, iterations: usize) -> Self {
        Self {
            stalled: true,
            ..Self::best_effort(root, residual, iterations)
        }
    }

    /// Returns a copy with `root` clamped to `[lower, upper]`.
    ///
    /// The residual is left as evaluated at the unclamped iterate.
    pub fn clamped(self, lower: T, upper: T) -> Self {
        Self {
            root: self.root.max(lower).min(upper),
            ..self
        }
    }

    /// Turns a non-converged estimate into the matching [`SolverError`].
    ///
    /// ```
    /// use pricer_core::math::solvers::RootEstimate;
    /// use pricer_core::types::SolverError;
    ///
    /// let est = RootEstimate::best_effort(0.3_f64, 1e-3, 120);
    /// assert_eq!(
    ///     est.into_result(),
    ///     Err(SolverError::MaxIterationsExceeded { iterations: 120 })
    /// );
    /// ```
    pub fn into_result(self) -> Result<Self, SolverError> {
        if self.converged {
            Ok(self)
        } else if self.stalled {
            Err(SolverError::DegenerateDenominator {
                x: self.root.to_f64().unwrap_or(f64::NAN),
            })
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: self.iterations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_flag() {
        assert!(RootEstimate::converged(1.0_f64, 0.0, 3).converged);
        assert!(!RootEstimate::best_effort(1.0_f64, 0.5, 3).converged);

        let stalled = RootEstimate::stalled(1.0_f64, 0.5, 0);
        assert!(stalled.stalled && !stalled.converged);
    }

    #[test]
    fn test_into_result() {
        assert!(RootEstimate::converged(1.0_f64, 0.0, 3).into_result().is_ok());
        assert_eq!(
            RootEstimate::stalled(0.5_f64, 2.0, 1).into_result(),
            Err(SolverError::DegenerateDenominator { x: 0.5 })
        );
        assert_eq!(
            RootEstimate::best_effort(0.5_f64, 2.0, 7).into_result(),
            Err(SolverError::MaxIterationsExceeded { iterations: 7 })
        );
    }

    #[test]
    fn test_clamped() {
        let est = RootEstimate::converged(6.5_f64, 1e-9, 12).clamped(1e-6, 5.0);
        assert_eq!(est.root, 5.0);
        assert!(est.converged);

        let est = RootEstimate::best_effort(-0.3_f64, 1.0, 4).clamped(1e-6, 5.0);
        assert_eq!(est.root, 1e-6);

        let est = RootEstimate::best_effort(0.3_f64, 1.0, 4).clamped(1e-6, 5.0);
        assert_eq!(est.root, 0.3);
    }
}
