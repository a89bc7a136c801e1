//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_cdf`: Cumulative distribution function (CDF)
//!
//! All functions are generic over `T: Float` so the same kernels serve
//! `f64` production pricing and `f32` compatibility checks.
//!
//! The CDF uses the classical Abramowitz and Stegun polynomial (formula
//! 26.2.17). The implied-volatility solver inverts prices built on this
//! approximation, so its coefficients are part of the numerical contract.

use num_traits::Float;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

/// Argument scale of the rational variable `k = 1 / (1 + P * |x|)`.
const AS_P: f64 = 0.231_641_9;

/// Abramowitz and Stegun 26.2.17 coefficients a1..a5.
const AS_A1: f64 = 0.319_381_530;
const AS_A2: f64 = -0.356_563_782;
const AS_A3: f64 = 1.781_477_937;
const AS_A4: f64 = -1.821_255_978;
const AS_A5: f64 = 1.330_274_429;

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2pi = T::from(SQRT_2PI).unwrap();

    (-half * x * x).exp() / sqrt_2pi
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) with the Abramowitz and Stegun
/// fifth-order polynomial in `k = 1 / (1 + 0.2316419·|x|)`:
///
/// Φ(x) ≈ 1 - φ(x)·(a1·k + a2·k² + a3·k³ + a4·k⁴ + a5·k⁵),  x ≥ 0
///
/// Negative arguments are reflected through Φ(x) = 1 - Φ(-x).
///
/// # Accuracy
/// Absolute error below 7.5e-8 for all finite x.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.0_f64) - 0.8413447461).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let k = one / (one + T::from(AS_P).unwrap() * x.abs());

    // Horner evaluation of a1·k + ... + a5·k⁵
    let a1 = T::from(AS_A1).unwrap();
    let a2 = T::from(AS_A2).unwrap();
    let a3 = T::from(AS_A3).unwrap();
    let a4 = T::from(AS_A4).unwrap();
    let a5 = T::from(AS_A5).unwrap();
    let poly = ((((a5 * k + a4) * k + a3) * k + a2) * k + a1) * k;

    let upper = one - norm_pdf(x) * poly;
    if x >= T::zero() {
        upper
    } else {
        one - upper
    }
}
