//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option valuation on top of the `pricer_core` numerics.
//!
//! This crate provides:
//! - Contract parameters and their validation
//! - Closed-form Black-Scholes-Merton prices and Greeks
//! - Cox-Ross-Rubinstein binomial tree (European and American exercise)
//! - Implied volatility (Brent with secant fallback)
//! - Engine entry points dispatching on [`engine::PricingModel`]
//!
//! ## Design Principles
//!
//! - **Pure functions**: every valuation is computed fresh from its inputs;
//!   no caches, no shared state, safe to call from any number of threads
//! - **Total kernels**: degenerate inputs return defined values, solver
//!   failures return clamped best-effort estimates
//! - **Validation at the edge**: [`instruments::ContractParams::validate`]
//!   is for callers; the kernels never call it
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionRight;
//! use pricer_models::engine::{implied_volatility, price, PricingModel};
//! use pricer_models::instruments::ContractParams;
//!
//! let params = ContractParams::new(100.0_f64, 100.0, 0.02, 0.0, 0.3, 0.5, OptionRight::Put);
//! params.validate().unwrap();
//!
//! let valuation = price(&params, PricingModel::BinomialAmerican { steps: 200 });
//! assert!(valuation.price > 0.0);
//! assert!(valuation.greeks.delta < 0.0);
//!
//! let european = price(&params, PricingModel::Analytic).price;
//! let sigma = implied_volatility(european, &params);
//! assert!((sigma - 0.3).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod implied;
pub mod instruments;
pub mod lattice;
