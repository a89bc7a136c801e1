//! # pricer_core: Mathematical Foundation for Vanilla Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal density and cumulative distribution (`math::distributions`)
//! - Root-finding solvers: Brent and secant (`math::solvers`)
//! - Contract vocabulary: `OptionRight`, `ExerciseStyle` (`types::option`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//! use pricer_core::types::OptionRight;
//!
//! // Distribution functions
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-9);
//!
//! // Root finding
//! let solver = BrentSolver::new(SolverConfig::default());
//! let estimate = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! // Contract vocabulary
//! assert_eq!(OptionRight::Call.intrinsic(110.0_f64, 100.0), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionRight`, `ExerciseStyle`
//!   and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
