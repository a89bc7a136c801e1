//! Lattice pricing methods.
//!
//! - [`BinomialTree`]: Cox-Ross-Rubinstein recombining tree with European
//!   or American exercise
//!
//! Node values live in a single `Vec` reused across time steps, so memory
//! is O(N) and nothing survives the valuation call.

mod binomial;

pub use binomial::BinomialTree;
