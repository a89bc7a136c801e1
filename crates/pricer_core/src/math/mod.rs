//! Mathematical building blocks for pricing.
//!
//! - [`distributions`]: standard normal density and CDF approximation
//! - [`solvers`]: root-finding algorithms (Brent, secant)

pub mod distributions;
pub mod solvers;
