//! Root-finding solvers for numerical computation.
//!
//! These solvers back the implied-volatility inversion of the analytic
//! pricer, but are written against plain closures `Fn(T) -> T` so they can
//! be exercised (and tested) on any scalar function.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Bracketed method combining inverse quadratic
//!   interpolation, secant steps and bisection
//! - [`SecantSolver`]: Unbracketed two-point secant iteration, best effort
//!
//! Both return a [`RootEstimate`] rather than failing on an exhausted
//! iteration budget; `converged` tells the caller which case occurred.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SecantSolver, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//!
//! let brent = BrentSolver::new(SolverConfig::default());
//! let bracketed = brent.find_root(f, 0.0, 2.0).unwrap();
//! assert!(bracketed.converged);
//!
//! let secant = SecantSolver::new(SolverConfig::new(1e-12, 50));
//! let estimate = secant.find_root(f, 1.0, 2.0);
//! assert!((estimate.root - bracketed.root).abs() < 1e-9);
//! ```

mod brent;
mod config;
mod estimate;
mod secant;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use estimate::RootEstimate;
pub use secant::SecantSolver;
