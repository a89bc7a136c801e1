//! Option right and exercise style definitions.

use num_traits::Float;
use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option right: the holder's right to buy (call) or sell (put).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
///
/// assert_eq!(OptionRight::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionRight::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// assert_eq!("put".parse::<OptionRight>().unwrap(), OptionRight::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionRight {
    /// Right to buy at the strike: payoff max(S - K, 0).
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0).
    Put,
}

impl OptionRight {
    /// Immediate-exercise payoff at underlying value `spot`.
    ///
    /// Undiscounted and floored at zero.
    #[inline]
    pub fn intrinsic<T: Float>(self, spot: T, strike: T) -> T {
        let raw = match self {
            OptionRight::Call => spot - strike,
            OptionRight::Put => strike - spot,
        };
        raw.max(T::zero())
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionRight::Call)
    }

    /// Lower-case identifier (`"call"` / `"put"`).
    pub fn as_str(self) -> &'static str {
        match self {
            OptionRight::Call => "call",
            OptionRight::Put => "put",
        }
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionRight {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionRight::Call),
            "put" | "p" => Ok(OptionRight::Put),
            other => Err(PricingError::InvalidInput(format!(
                "unknown option right '{}', expected call or put",
                other
            ))),
        }
    }
}

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Examples
/// ```
/// use pricer_core::types::ExerciseStyle;
///
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    #[default]
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether exercise before expiry is permitted.
    #[inline]
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => f.write_str("european"),
            ExerciseStyle::American => f.write_str("american"),
        }
    }
}
