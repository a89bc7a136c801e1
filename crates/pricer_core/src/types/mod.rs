//! Core financial types.
//!
//! This module provides:
//! - `option`: Option right (call/put) and exercise style (European/American)
//! - `error`: Structured error types for pricing and solver operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionRight`], [`ExerciseStyle`] from `option`
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::{PricingError, SolverError};
pub use option::{ExerciseStyle, OptionRight};
