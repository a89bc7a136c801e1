//! Criterion benchmarks for pricer_core numerics.
//!
//! Measures the normal CDF/PDF kernels and both root finders on a
//! volatility-shaped objective, to characterise per-call cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::math::solvers::{BrentSolver, SecantSolver, SolverConfig};

/// Smooth, monotone objective with a root near 0.25, similar in shape to
/// a vega-weighted price error.
fn objective(x: f64) -> f64 {
    (x * 4.0).tanh() - 0.761_594_155_955_764_9
}

/// Benchmark the distribution kernels over a grid of arguments.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let xs: Vec<f64> = (0..1000).map(|i| -5.0 + 10.0 * i as f64 / 999.0).collect();

    group.bench_function("norm_cdf_1000", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(norm_cdf(black_box(x)));
            }
        });
    });

    group.bench_function("norm_pdf_1000", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(norm_pdf(black_box(x)));
            }
        });
    });

    group.finish();
}

/// Benchmark Brent and secant iterations across tolerances.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");

    for tolerance in [1e-6, 1e-10, 1e-14] {
        let config = SolverConfig::new(tolerance, 120);

        let brent = BrentSolver::new(config);
        group.bench_with_input(
            BenchmarkId::new("brent", format!("{:e}", tolerance)),
            &brent,
            |b, solver| {
                b.iter(|| solver.find_root(objective, black_box(1e-6), black_box(5.0)));
            },
        );

        let secant = SecantSolver::new(config).with_floor(1e-6);
        group.bench_with_input(
            BenchmarkId::new("secant", format!("{:e}", tolerance)),
            &secant,
            |b, solver| {
                b.iter(|| solver.find_root(objective, black_box(0.2), black_box(0.5)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distributions, bench_solvers);
criterion_main!(benches);
