//! Criterion benchmarks for u-colony solvers.
//!
//! Uses synthetic random symmetric instances to measure solver throughput
//! independent of any matrix provider.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_colony::aco::{AcoConfig, AcoRunner, AcoVariant};
use u_colony::ga::{GaConfig, GaRunner};
use u_colony::matrix::CostMatrix;
use u_colony::random::create_rng;

/// Random symmetric instance with costs in [1, 100).
fn random_instance(n: usize, seed: u64) -> CostMatrix {
    let mut rng = create_rng(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let c = rng.random_range(1.0..100.0);
            rows[i][j] = c;
            rows[j][i] = c;
        }
    }
    CostMatrix::from_rows(rows).expect("generated instance is valid")
}

fn bench_aco_variants(c: &mut Criterion) {
    let matrix = random_instance(30, 42);
    let mut group = c.benchmark_group("aco_30_nodes");

    for (name, variant) in [
        ("standard", AcoVariant::Standard),
        ("elitist", AcoVariant::Elitist { elitist_factor: 5.0 }),
        (
            "minmax",
            AcoVariant::MinMax {
                pheromone_min: 0.01,
                pheromone_max: 10.0,
            },
        ),
    ] {
        let config = AcoConfig::default()
            .with_num_ants(20)
            .with_num_iterations(50)
            .with_variant(variant)
            .with_seed(42);
        group.bench_function(name, |b| {
            b.iter(|| AcoRunner::run(black_box(&matrix), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_aco_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_scaling");
    for n in [10, 20, 40] {
        let matrix = random_instance(n, 7);
        let config = AcoConfig::default()
            .with_num_ants(20)
            .with_num_iterations(20)
            .with_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| AcoRunner::run(black_box(&matrix), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_parallel_construction(c: &mut Criterion) {
    let matrix = random_instance(60, 11);
    let mut group = c.benchmark_group("aco_60_nodes");

    for (name, parallel) in [("sequential", false), ("parallel", true)] {
        let config = AcoConfig::default()
            .with_num_ants(50)
            .with_num_iterations(20)
            .with_parallel(parallel)
            .with_seed(11);
        group.bench_function(name, |b| {
            b.iter(|| AcoRunner::run(black_box(&matrix), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let matrix = random_instance(30, 42);
    let config = GaConfig::default()
        .with_population_size(100)
        .with_num_generations(100)
        .with_seed(42);

    c.bench_function("ga_30_nodes", |b| {
        b.iter(|| GaRunner::run(black_box(&matrix), black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_aco_variants,
    bench_aco_scaling,
    bench_parallel_construction,
    bench_ga
);
criterion_main!(benches);
