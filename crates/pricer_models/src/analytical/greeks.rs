//! Closed-form Black-Scholes-Merton sensitivities.
//!
//! | Greek | Call                                   | Put                                     |
//! |-------|----------------------------------------|-----------------------------------------|
//! | Δ     | e^(-qT)·N(d₁)                          | -e^(-qT)·N(-d₁)                         |
//! | Γ     | e^(-qT)·φ(d₁) / (Sσ√T)                 | same                                    |
//! | ν     | S·e^(-qT)·φ(d₁)·√T                     | same                                    |
//! | Θ     | -A - rK·e^(-rT)·N(d₂) + qS·e^(-qT)·N(d₁) | -A + rK·e^(-rT)·N(-d₂) - qS·e^(-qT)·N(-d₁) |
//! | ρ     | K·T·e^(-rT)·N(d₂)                      | -K·T·e^(-rT)·N(-d₂)                     |
//!
//! with A = S·e^(-qT)·φ(d₁)·σ / (2√T). Theta is per year, vega and rho per
//! unit (not per percent) change.

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::OptionRight;

use super::black_scholes::BlackScholes;
use crate::instruments::ContractParams;

/// The five first/second-order sensitivities of an option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (calendar time, i.e. -∂V/∂T)
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Greeks of a contract with no optionality left.
    ///
    /// Delta is the step function of moneyness (1 for an in-the-money
    /// call, -1 for an in-the-money put, 0 otherwise); all else is zero.
    fn degenerate(params: &ContractParams<T>) -> Self {
        let delta = match params.right {
            OptionRight::Call if params.spot > params.strike => T::one(),
            OptionRight::Put if params.spot < params.strike => -T::one(),
            _ => T::zero(),
        };
        Self {
            delta,
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }
}

impl<T: Float> BlackScholes<T> {
    /// Computes all five Greeks in one pass.
    ///
    /// When σ ≤ 0 or T ≤ 0 the degenerate step-function values are
    /// returned instead.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionRight;
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::ContractParams;
    ///
    /// let call = ContractParams::new(100.0_f64, 100.0, 0.05, 0.0, 0.2, 1.0, OptionRight::Call);
    /// let greeks = BlackScholes::new(call).greeks();
    /// assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(&self) -> Greeks<T> {
        let params = self.params();
        if params.is_expired_or_riskless() {
            return Greeks::degenerate(params);
        }

        let two = T::from(2.0).unwrap();
        let ContractParams {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            expiry,
            right,
        } = *params;

        let sqrt_t = expiry.sqrt();
        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        let pdf_d1 = norm_pdf(d1);
        let df_q = self.dividend_discount();
        let df_r = self.rate_discount();

        let gamma = df_q * pdf_d1 / (spot * volatility * sqrt_t);
        let vega = spot * df_q * pdf_d1 * sqrt_t;
        let decay = -spot * df_q * pdf_d1 * volatility / (two * sqrt_t);

        match right {
            OptionRight::Call => Greeks {
                delta: df_q * norm_cdf(d1),
                gamma,
                vega,
                theta: decay - rate * strike * df_r * norm_cdf(d2)
                    + dividend_yield * spot * df_q * norm_cdf(d1),
                rho: strike * expiry * df_r * norm_cdf(d2),
            },
            OptionRight::Put => Greeks {
                delta: -df_q * norm_cdf(-d1),
                gamma,
                vega,
                theta: decay + rate * strike * df_r * norm_cdf(-d2)
                    - dividend_yield * spot * df_q * norm_cdf(-d1),
                rho: -strike * expiry * df_r * norm_cdf(-d2),
            },
        }
    }
}

/// Convenience wrapper: `BlackScholes::new(params).greeks()`.
#[inline]
pub fn analytic_greeks<T: Float>(params: &ContractParams<T>) -> Greeks<T> {
    BlackScholes::new(*params).greeks()
}
