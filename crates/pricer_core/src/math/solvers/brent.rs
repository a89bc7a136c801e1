//! Brent's method root-finding solver.

use super::{RootEstimate, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Keeps a sign-changing bracket `[lo, hi]` plus the previous best iterate
/// `c`, and on each step tries inverse quadratic interpolation (or a secant
/// step when only two distinct points are available), falling back to
/// bisection whenever the interpolated step would leave the comfortable
/// interior of the bracket.
///
/// Termination: the bracket half-width drops below `tolerance`, or
/// `f(hi)` is exactly zero. When the iteration budget is spent first the
/// last `hi` is returned with `converged = false`.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let estimate = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(estimate.converged);
/// assert!(f(estimate.root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// # Returns
    ///
    /// * `Ok(estimate)` - Best root estimate; check `estimate.converged`
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same strict sign
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    /// let estimate = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-10);
    ///
    /// assert!(solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0).is_err());
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<RootEstimate<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let half = T::from(0.5).unwrap();
        let tol = self.config.tolerance;

        let fa = f(a);
        let fb = f(b);
        if fa * fb > zero {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // `hi` is the best estimate, `lo` the contrapoint, `c` the previous `hi`.
        let (mut lo, mut f_lo) = (a, fa);
        let (mut hi, mut f_hi) = (b, fb);
        let (mut c, mut f_c) = (lo, f_lo);
        let mut d = hi - lo;
        let mut e = d;

        for iteration in 0..self.config.max_iterations {
            if f_hi == zero {
                return Ok(RootEstimate::converged(hi, f_hi, iteration));
            }

            // Restore the sign change between lo and hi
            if f_lo * f_hi > zero {
                std::mem::swap(&mut lo, &mut c);
                std::mem::swap(&mut f_lo, &mut f_c);
            }

            if f_lo.abs() < f_hi.abs() {
                std::mem::swap(&mut lo, &mut hi);
                std::mem::swap(&mut f_lo, &mut f_hi);
            }

            let m = half * (lo - hi);
            if m.abs() < tol || f_hi == zero {
                return Ok(RootEstimate::converged(hi, f_hi, iteration));
            }

            if e.abs() > tol && f_c.abs() > f_hi.abs() {
                let s = f_hi / f_c;
                let (mut p, mut q) = if lo == c {
                    // Secant through lo/hi
                    (two * m * s, one - s)
                } else {
                    // Inverse quadratic through c, lo, hi
                    let q = f_c / f_lo;
                    let r = f_hi / f_lo;
                    (
                        s * (two * m * q * (q - r) - (hi - c) * (r - one)),
                        (q - one) * (r - one) * (s - one),
                    )
                };
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                if two * p < (three * m * q - (tol * q).abs()).min((e * q).abs()) {
                    e = d;
                    d = p / q;
                } else {
                    d = m;
                    e = m;
                }
            } else {
                d = m;
                e = m;
            }

            c = hi;
            f_c = f_hi;
            hi = if d.abs() > tol {
                hi + d
            } else if m > zero {
                hi + tol
            } else {
                hi - tol
            };
            f_hi = f(hi);
        }

        Ok(RootEstimate::best_effort(
            hi,
            f_hi,
            self.config.max_iterations,
        ))
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
