//! Black-Scholes-Merton pricing model for European options.
//!
//! Closed-form prices for European calls and puts on an underlying paying
//! a continuous dividend (carry) yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Contracts
//!
//! When σ ≤ 0, T ≤ 0, S ≤ 0 or K ≤ 0 the price is the **undiscounted**
//! intrinsic value max(0, S - K) / max(0, K - S). This matches the engine's
//! published behaviour and is kept as is.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::OptionRight;

use crate::instruments::ContractParams;

/// Black-Scholes-Merton model bound to one set of contract parameters.
///
/// Stateless apart from the copied parameters; build one per valuation.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::ContractParams;
///
/// let call = ContractParams::new(100.0_f64, 100.0, 0.05, 0.0, 0.2, 1.0, OptionRight::Call);
/// let put = call.with_right(OptionRight::Put);
///
/// let c = BlackScholes::new(call).price();
/// let p = BlackScholes::new(put).price();
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    params: ContractParams<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates the model. No validation is performed.
    pub fn new(params: ContractParams<T>) -> Self {
        Self { params }
    }

    /// Returns the bound contract parameters.
    #[inline]
    pub fn params(&self) -> &ContractParams<T> {
        &self.params
    }

    /// σ√T
    #[inline]
    pub(crate) fn vol_sqrt_t(&self) -> T {
        self.params.volatility * self.params.expiry.sqrt()
    }

    /// Computes d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T).
    ///
    /// Only meaningful for σ > 0 and T > 0.
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from(0.5).unwrap();
        let ContractParams {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            expiry,
            ..
        } = self.params;

        let drift = (rate - dividend_yield + half * volatility * volatility) * expiry;
        ((spot / strike).ln() + drift) / self.vol_sqrt_t()
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.vol_sqrt_t()
    }

    /// e^(-qT), the dividend discount factor.
    #[inline]
    pub(crate) fn dividend_discount(&self) -> T {
        (-self.params.dividend_yield * self.params.expiry).exp()
    }

    /// e^(-rT), the risk-free discount factor.
    #[inline]
    pub(crate) fn rate_discount(&self) -> T {
        (-self.params.rate * self.params.expiry).exp()
    }

    /// Whether the degenerate intrinsic-value branch applies to the price.
    #[inline]
    fn is_degenerate(&self) -> bool {
        let zero = T::zero();
        self.params.is_expired_or_riskless()
            || self.params.spot <= zero
            || self.params.strike <= zero
    }

    /// Computes the option price.
    ///
    /// Deep out-of-the-money prices are the difference of two tiny cdf
    /// tail terms and can land a few 1e-14 below zero. The result is not
    /// floored: the implied-vol objective must stay this exact function.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionRight;
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::ContractParams;
    ///
    /// // No optionality left: undiscounted intrinsic value
    /// let params = ContractParams::new(100.0_f64, 90.0, 0.05, 0.0, 0.0, 1.0, OptionRight::Call);
    /// assert_eq!(BlackScholes::new(params).price(), 10.0);
    /// ```
    pub fn price(&self) -> T {
        if self.is_degenerate() {
            return self.params.intrinsic();
        }

        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        let forward_leg = self.params.spot * self.dividend_discount();
        let strike_leg = self.params.strike * self.rate_discount();

        match self.params.right {
            OptionRight::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionRight::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
        }
    }
}

/// Convenience wrapper: `BlackScholes::new(params).price()`.
#[inline]
pub fn analytic_price<T: Float>(params: &ContractParams<T>) -> T {
    BlackScholes::new(*params).price()
}
