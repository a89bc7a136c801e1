//! Contract definitions for vanilla option valuation.
//!
//! This module provides:
//! - [`ContractParams`]: spot, strike, rate, yield, volatility, expiry and right
//! - [`InstrumentError`]: caller-side validation failures
//!
//! [`OptionRight`] and [`ExerciseStyle`] live in `pricer_core` and are
//! re-exported here for convenience.

pub mod error;
pub mod params;

pub use error::InstrumentError;
pub use params::ContractParams;
pub use pricer_core::types::{ExerciseStyle, OptionRight};
