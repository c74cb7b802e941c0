//! Seeded graphs shared by the benchmarks.

use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{EdgeProbability, Graph, RewireParams, random_graph, rewire, ring_lattice};

use crate::{
    error::BenchSetupError,
    params::{LatticeBenchParams, RandomBenchParams},
};

/// Builds the ring lattice described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the lattice is impossible.
pub fn lattice(params: LatticeBenchParams) -> Result<Graph, BenchSetupError> {
    Ok(ring_lattice(params.vertices, params.degree)?)
}

/// Builds a random graph on `params.lattice.vertices` vertices.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the probability is invalid.
pub fn random(params: RandomBenchParams) -> Result<Graph, BenchSetupError> {
    let probability = EdgeProbability::new(params.probability)?;
    let mut rng = SmallRng::seed_from_u64(params.seed);
    Ok(random_graph(params.lattice.vertices, probability, &mut rng)?)
}

/// Builds the lattice and rewires it into a small-world graph.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the lattice, probability or
/// rewiring fails.
pub fn small_world(params: RandomBenchParams) -> Result<Graph, BenchSetupError> {
    let mut graph = lattice(params.lattice)?;
    let rewire_params = RewireParams::new(params.probability)?;
    let mut rng = SmallRng::seed_from_u64(params.seed);
    rewire(&mut graph, &rewire_params, &mut rng)?;
    Ok(graph)
}
