//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. `execute` computes the
//! report, `run` prints it.

pub mod chain;
pub mod implied_vol;
pub mod price;
