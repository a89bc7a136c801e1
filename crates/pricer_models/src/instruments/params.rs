//! Contract valuation parameters.

use num_traits::Float;
use pricer_core::types::OptionRight;

use super::error::InstrumentError;

/// Market and contract inputs for one vanilla valuation.
///
/// A plain value: built per call, consumed by the pricers, discarded.
/// Construction performs no checks; callers that accept untrusted input
/// run [`validate`](Self::validate) first.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
/// use pricer_models::instruments::ContractParams;
///
/// let params = ContractParams::new(100.0_f64, 95.0, 0.02, 0.0, 0.3, 0.5, OptionRight::Call);
/// assert!(params.validate().is_ok());
///
/// let put = params.with_right(OptionRight::Put).with_volatility(0.25);
/// assert_eq!(put.volatility, 0.25);
/// assert_eq!(put.strike, 95.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams<T: Float> {
    /// Spot price of the underlying (S)
    pub spot: T,
    /// Strike price (K)
    pub strike: T,
    /// Continuously-compounded risk-free rate (r)
    pub rate: T,
    /// Continuous dividend / carry yield (q)
    pub dividend_yield: T,
    /// Volatility (σ), annualised
    pub volatility: T,
    /// Time to expiry in years (T)
    pub expiry: T,
    /// Call or put
    pub right: OptionRight,
}

impl<T: Float> ContractParams<T> {
    /// Creates a parameter set.
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
        expiry: T,
        right: OptionRight,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            expiry,
            right,
        }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: T) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different option right.
    #[inline]
    pub fn with_right(self, right: OptionRight) -> Self {
        Self { right, ..self }
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: T) -> Self {
        Self { strike, ..self }
    }

    /// True when the closed form has no optionality left to price
    /// (σ ≤ 0 or T ≤ 0).
    #[inline]
    pub fn is_expired_or_riskless(&self) -> bool {
        self.volatility <= T::zero() || self.expiry <= T::zero()
    }

    /// Undiscounted payoff of immediate exercise at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> T {
        self.right.intrinsic(self.spot, self.strike)
    }

    /// Payoff of immediate exercise if the underlying were at `spot`.
    #[inline]
    pub fn intrinsic_at(&self, spot: T) -> T {
        self.right.intrinsic(spot, self.strike)
    }

    /// Checks the caller-side preconditions of the pricing engine.
    ///
    /// - every field finite
    /// - spot > 0, strike > 0
    /// - volatility ≥ 0, expiry ≥ 0
    ///
    /// Zero volatility or expiry is accepted: those contracts take the
    /// degenerate intrinsic-value branch.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let zero = T::zero();
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("dividend_yield", self.dividend_yield),
            ("volatility", self.volatility),
            ("expiry", self.expiry),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InstrumentError::NonFinite { field });
        }

        if self.spot <= zero {
            return Err(InstrumentError::InvalidSpot {
                spot: self.spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.volatility < zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: self.volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.expiry < zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: self.expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> ContractParams<f64> {
        ContractParams::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0, OptionRight::Call)
    }

    #[test]
    fn test_valid_params() {
        assert!(atm_call().validate().is_ok());
    }

    #[test]
    fn test_zero_vol_and_expiry_are_valid() {
        let params = ContractParams {
            volatility: 0.0,
            expiry: 0.0,
            ..atm_call()
        };
        assert!(params.validate().is_ok());
        assert!(params.is_expired_or_riskless());
    }

    #[test]
    fn test_invalid_spot() {
        let params = ContractParams {
            spot: 0.0,
            ..atm_call()
        };
        assert_eq!(
            params.validate(),
            Err(InstrumentError::InvalidSpot { spot: 0.0 })
        );
    }

    #[test]
    fn test_invalid_strike() {
        let params = atm_call().with_strike(-5.0);
        assert_eq!(
            params.validate(),
            Err(InstrumentError::InvalidStrike { strike: -5.0 })
        );
    }

    #[test]
    fn test_negative_volatility() {
        let params = atm_call().with_volatility(-0.1);
        assert!(matches!(
            params.validate(),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_negative_expiry() {
        let params = ContractParams {
            expiry: -0.5,
            ..atm_call()
        };
        assert!(matches!(
            params.validate(),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_non_finite_rate() {
        let params = ContractParams {
            rate: f64::NAN,
            ..atm_call()
        };
        assert_eq!(
            params.validate(),
            Err(InstrumentError::NonFinite { field: "rate" })
        );
    }

    #[test]
    fn test_negative_rate_allowed() {
        let params = ContractParams {
            rate: -0.01,
            ..atm_call()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_intrinsic() {
        let params = atm_call().with_strike(90.0);
        assert_eq!(params.intrinsic(), 10.0);
        assert_eq!(params.with_right(OptionRight::Put).intrinsic(), 0.0);
    }
}
