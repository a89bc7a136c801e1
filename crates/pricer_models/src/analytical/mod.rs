//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton solution:
//! - Call/put prices with a continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where memory matters
//! - **Total functions**: degenerate inputs (σ ≤ 0, T ≤ 0) fall back to
//!   intrinsic value instead of returning errors

pub mod black_scholes;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{analytic_price, BlackScholes};
pub use greeks::{analytic_greeks, Greeks};
