//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_distributions_module_exports() {
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::math::distributions::norm_pdf;

    let _ = norm_cdf(0.5_f64);
    let _ = norm_pdf(0.5_f32);
}

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use pricer_core::math::solvers::BrentSolver;
    use pricer_core::math::solvers::RootEstimate;
    use pricer_core::math::solvers::SecantSolver;
    use pricer_core::math::solvers::SolverConfig;

    let config: SolverConfig<f64> = SolverConfig::default();
    let brent: RootEstimate<f64> = BrentSolver::new(config)
        .find_root(|x| x - 1.0, 0.0, 2.0)
        .unwrap();
    let secant = SecantSolver::new(config).find_root(|x: f64| x - 1.0, 0.0, 2.0);
    assert!((brent.root - secant.root).abs() < 1e-9);
}

/// Test that shared types are accessible via module and re-export paths.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{PricingError, SolverError};
    use pricer_core::types::option::{ExerciseStyle, OptionRight};

    let _: pricer_core::types::PricingError = PricingError::InvalidInput("x".to_string());
    let _: pricer_core::types::SolverError = SolverError::NoBracket { a: 0.0, b: 1.0 };
    let _: pricer_core::types::OptionRight = OptionRight::Put;
    let _: pricer_core::types::ExerciseStyle = ExerciseStyle::American;
}

/// Generic code can be written against the re-exported surface alone.
#[test]
fn test_generic_usage() {
    use num_traits::Float;
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::types::OptionRight;

    fn moneyness_weight<T: Float>(right: OptionRight, spot: T, strike: T) -> T {
        let payoff = right.intrinsic(spot, strike);
        payoff * norm_cdf(T::zero())
    }

    let weight = moneyness_weight(OptionRight::Call, 110.0_f64, 100.0);
    assert!((weight - 5.0).abs() < 1e-6);
}
