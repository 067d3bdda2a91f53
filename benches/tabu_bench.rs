//! Criterion benchmarks for the Tabu Search engine.
//!
//! Uses uniformly random instances in a 10x10 square, the usual setting
//! for small TSP experiments.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tabu_tsp::{DistanceMatrix, MoveCatalog, TabuConfig, TabuRunner};

fn random_instance(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)))
        .collect()
}

// ===========================================================================
// Building blocks
// ===========================================================================

fn bench_neighborhood_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_scan");

    for &n in &[10usize, 30, 60] {
        let matrix = DistanceMatrix::from_coordinates(&random_instance(n, 42));
        let catalog = MoveCatalog::new(n);
        let tour: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let best = catalog
                    .iter()
                    .map(|mv| matrix.tour_length(&mv.apply(black_box(&tour))))
                    .fold(f64::INFINITY, f64::min);
                black_box(best)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_tabu_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_run");
    group.sample_size(10);

    for (n, iterations) in [(10usize, 50usize), (30, 50), (50, 20)] {
        let coords = random_instance(n, 7);
        let config = TabuConfig::default()
            .with_max_iterations(iterations)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_i{}", n, iterations), n),
            &(coords, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_tabu_run_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_run_parallel");
    group.sample_size(10);

    for &n in &[30usize, 60] {
        let coords = random_instance(n, 7);
        let config = TabuConfig::default()
            .with_max_iterations(20)
            .with_seed(42)
            .with_parallel(true);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(coords, config), |b, (p, c)| {
            b.iter(|| black_box(TabuRunner::run(black_box(p), black_box(c))))
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_neighborhood_scan, bench_tabu_run, bench_tabu_run_parallel);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_neighborhood_scan, bench_tabu_run);
criterion_main!(benches);
