//! Cox-Ross-Rubinstein binomial tree.
//!
//! ## Parameterisation
//!
//! - dt = T / N
//! - u = e^(σ√dt), d = 1/u
//! - p = (e^((r-q)dt) - d) / (u - d)
//! - per-step discount e^(-r·dt)
//!
//! Terminal node `i` (0 ≤ i ≤ N) sits at S·u^i·d^(N-i). Backward induction
//! rolls `cont = disc·(p·v[i+1] + (1-p)·v[i])` down to the root; American
//! exercise takes `max(cont, payoff)` at every interior node.
//!
//! Cost is O(N²) time and O(N) space. N is not bounded here.

use num_traits::Float;
use pricer_core::types::ExerciseStyle;

use crate::instruments::ContractParams;

/// CRR binomial tree pricer.
///
/// # Examples
/// ```
/// use pricer_core::types::{ExerciseStyle, OptionRight};
/// use pricer_models::lattice::BinomialTree;
/// use pricer_models::instruments::ContractParams;
///
/// let put = ContractParams::new(100.0_f64, 100.0, 0.05, 0.0, 0.3, 1.0, OptionRight::Put);
///
/// let european = BinomialTree::new(200, ExerciseStyle::European).price(&put);
/// let american = BinomialTree::new(200, ExerciseStyle::American).price(&put);
/// assert!(american > european);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
    exercise: ExerciseStyle,
}

impl BinomialTree {
    /// Creates a tree with `steps` time steps.
    ///
    /// `steps` must be at least 1; callers enforce this. A zero-step tree
    /// collapses to the intrinsic value at the root.
    pub fn new(steps: usize, exercise: ExerciseStyle) -> Self {
        Self { steps, exercise }
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Exercise style applied at interior nodes.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Prices the contract by backward induction.
    ///
    /// With σ ≤ 0 or T ≤ 0 the tree has no spread and the undiscounted
    /// intrinsic value is returned, as for the closed form.
    pub fn price<T: Float>(&self, params: &ContractParams<T>) -> T {
        if self.steps == 0 || params.is_expired_or_riskless() {
            return params.intrinsic();
        }

        let one = T::one();
        let n = T::from(self.steps).unwrap();
        let dt = params.expiry / n;
        let u = (params.volatility * dt.sqrt()).exp();
        let d = one / u;
        let p = (((params.rate - params.dividend_yield) * dt).exp() - d) / (u - d);
        let disc = (-params.rate * dt).exp();

        // spot · u^j · d^(i-j) = spot · d^i · (u/d)^j
        let ratio = u / d;
        let disc_p = disc * p;
        let disc_1mp = disc * (one - p);
        let american = self.exercise.allows_early_exercise();

        let mut values = Vec::with_capacity(self.steps + 1);
        let mut node_spot = params.spot * d.powi(self.steps as i32);
        for _ in 0..=self.steps {
            values.push(params.intrinsic_at(node_spot));
            node_spot = node_spot * ratio;
        }

        for step in (0..self.steps).rev() {
            let mut node_spot = params.spot * d.powi(step as i32);
            for j in 0..=step {
                let continuation = disc_p * values[j + 1] + disc_1mp * values[j];
                values[j] = if american {
                    continuation.max(params.intrinsic_at(node_spot))
                } else {
                    continuation
                };
                node_spot = node_spot * ratio;
            }
        }

        values[0]
    }
}
