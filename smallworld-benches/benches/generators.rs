//! Graph generator benchmarks.
//!
//! Measures ring-lattice construction, random edge sampling and
//! Watts–Strogatz rewiring across graph sizes. Rewiring is timed on a fresh
//! lattice clone per iteration so each run starts from the same ring.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use smallworld_benches::{
    error::BenchSetupError,
    fixtures,
    params::{LatticeBenchParams, RandomBenchParams},
};
use smallworld_core::{EdgeProbability, RewireParams, random_graph, rewire, ring_lattice};

/// Seed used for every randomised generator in this benchmark.
const SEED: u64 = 42;

/// Ring sizes to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 5_000];

/// Lattice degree used throughout.
const DEGREE: usize = 10;

/// Probability used for random edges and rewiring.
const PROBABILITY: f64 = 0.1;

fn params(vertices: usize) -> RandomBenchParams {
    RandomBenchParams {
        lattice: LatticeBenchParams {
            vertices,
            degree: DEGREE,
        },
        probability: PROBABILITY,
        seed: SEED,
    }
}

fn ring_lattice_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_lattice");
    for &vertices in VERTEX_COUNTS {
        let shape = params(vertices).lattice;
        group.bench_with_input(BenchmarkId::from_parameter(shape), &shape, |b, input| {
            b.iter(|| black_box(ring_lattice(input.vertices, input.degree)));
        });
    }
    group.finish();
}

fn random_graph_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("random_graph");
    group.sample_size(20);
    let probability = EdgeProbability::new(PROBABILITY)?;
    // Pair sampling is quadratic; the largest ring is left out.
    for &vertices in VERTEX_COUNTS.iter().take(2) {
        let bench_params = params(vertices);
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_params),
            &vertices,
            |b, &count| {
                b.iter(|| {
                    let mut rng = SmallRng::seed_from_u64(SEED);
                    black_box(random_graph(count, probability, &mut rng))
                });
            },
        );
    }
    group.finish();
    Ok(())
}

fn random_graph_bench(c: &mut Criterion) {
    if let Err(err) = random_graph_impl(c) {
        panic!("random_graph benchmark setup failed: {err}");
    }
}

fn rewire_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("rewire");
    let rewire_params = RewireParams::new(PROBABILITY)?;
    for &vertices in VERTEX_COUNTS {
        let bench_params = params(vertices);
        let lattice = fixtures::lattice(bench_params.lattice)?;
        group.bench_with_input(
            BenchmarkId::from_parameter(bench_params),
            &lattice,
            |b, ring| {
                b.iter_batched(
                    || (ring.clone(), SmallRng::seed_from_u64(SEED)),
                    |(mut graph, mut rng)| black_box(rewire(&mut graph, &rewire_params, &mut rng)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
    Ok(())
}

fn rewire_bench(c: &mut Criterion) {
    if let Err(err) = rewire_impl(c) {
        panic!("rewire benchmark setup failed: {err}");
    }
}

criterion_group!(benches, ring_lattice_bench, random_graph_bench, rewire_bench);
criterion_main!(benches);
