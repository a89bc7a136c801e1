//! Implied volatility.
//!
//! Inverts the closed-form pricer with a bracketed Brent search and an
//! unbracketed secant fallback. See [`ImpliedVolSolver`].

mod volatility;

pub use volatility::{ImpliedVol, ImpliedVolConfig, ImpliedVolSolver, SolveMethod};
