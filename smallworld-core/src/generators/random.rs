//! Erdős–Rényi random edges.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{Graph, Result, VertexId};

use super::{EdgeProbability, numbered_vertices};

/// Visits every unordered pair of distinct vertices once and joins it with
/// probability `probability`. Returns the number of edges added.
///
/// Pairs are visited as `(i, j)` with `i < j` in handle order, so a seeded
/// `rng` reproduces the same graph. Pairs that are already joined are
/// re-inserted and still counted.
///
/// # Errors
/// Only fails if the graph's own invariants are broken; the pairs it visits
/// are always valid.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallworld_core::{EdgeProbability, Graph, add_random_edges};
///
/// let mut graph = Graph::with_vertices(["a", "b", "c", "d"]);
/// let mut rng = SmallRng::seed_from_u64(1);
/// let added = add_random_edges(&mut graph, EdgeProbability::ALWAYS, &mut rng)
///     .expect("pairs are valid");
/// assert_eq!(added, 6);
/// ```
#[instrument(
    name = "generators.random",
    err,
    skip(graph, rng),
    fields(vertices = graph.vertex_count(), probability = probability.get()),
)]
pub fn add_random_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    probability: EdgeProbability,
    rng: &mut R,
) -> Result<usize> {
    let vertices = graph.vertex_count();
    let mut added = 0_usize;

    for low in 0..vertices {
        for high in (low + 1)..vertices {
            if probability.sample(rng) {
                graph.connect(VertexId::new(low), VertexId::new(high))?;
                added += 1;
            }
        }
    }

    debug!(added, "random edges drawn");
    Ok(added)
}

/// Builds a random graph on `vertices` vertices labeled `"0"` to `"n-1"`.
///
/// # Errors
/// Propagates failures from [`add_random_edges`].
pub fn random_graph<R: Rng + ?Sized>(
    vertices: usize,
    probability: EdgeProbability,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = numbered_vertices(vertices);
    add_random_edges(&mut graph, probability, rng)?;
    Ok(graph)
}
