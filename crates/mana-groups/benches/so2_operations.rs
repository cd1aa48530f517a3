//! Benchmarks for SO(2) operations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mana_core::prelude::*;
use mana_groups::So2;
use nalgebra::{Matrix2, Vector1, Vector2};

fn benchmark_group_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("so2_group");

    let a = So2::from_angle(0.3_f64);
    let b = So2::from_angle(-2.1_f64);
    let point = Vector2::new(1.5, -0.5);

    group.bench_function("compose", |bench| {
        bench.iter(|| black_box(&a).compose(black_box(&b)));
    });

    group.bench_function("inverse", |bench| {
        bench.iter(|| black_box(&a).inverse());
    });

    group.bench_function("act", |bench| {
        bench.iter(|| black_box(&a).act(black_box(&point)));
    });

    group.finish();
}

fn benchmark_lie_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("so2_lie");

    for &theta in &[1e-9_f64, 0.5, 3.0] {
        let tangent = Vector1::new(theta);
        let element = So2::<f64>::exp(&tangent);

        group.bench_with_input(BenchmarkId::new("exp", theta), &tangent, |bench, v| {
            bench.iter(|| So2::<f64>::exp(black_box(v)));
        });

        group.bench_with_input(BenchmarkId::new("log", theta), &element, |bench, g| {
            bench.iter(|| black_box(g).log());
        });
    }

    group.finish();
}

fn benchmark_manifold_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("so2_manifold");

    let beg = So2::from_angle(-1.0_f64);
    let end = So2::from_angle(2.5_f64);

    for &fraction in &[0.0_f64, 0.5, 2.0] {
        group.bench_with_input(
            BenchmarkId::new("interpolate", fraction),
            &fraction,
            |bench, &t| {
                bench.iter(|| black_box(&beg).interpolate(black_box(&end), t));
            },
        );
    }

    group.bench_function("distance", |bench| {
        bench.iter(|| black_box(&beg).distance_to(black_box(&end)));
    });

    let noisy = Matrix2::new(1.02, -0.31, 0.29, 0.97);
    group.bench_function("project", |bench| {
        bench.iter(|| So2::<f64>::project(black_box(&noisy)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_group_operations,
    benchmark_lie_operations,
    benchmark_manifold_operations
);
criterion_main!(benches);
