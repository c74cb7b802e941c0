//! Local and global clustering coefficients.

use tracing::{debug, instrument, warn};

use crate::{Graph, Result, VertexId, error::GraphError};

/// Fraction of the neighbour pairs of `vertex` that are themselves joined.
///
/// Vertices with fewer than two neighbours, and vertices absent from the
/// graph, score `0.0`.
///
/// # Examples
/// ```
/// use smallworld_core::{VertexId, local_clustering, ring_lattice};
///
/// // Each vertex of a degree-4 ring sees 3 of its 6 neighbour pairs joined.
/// let graph = ring_lattice(12, 4).expect("valid lattice");
/// assert_eq!(local_clustering(&graph, VertexId::new(0)), 0.5);
/// ```
#[must_use]
pub fn local_clustering(graph: &Graph, vertex: VertexId) -> f64 {
    let neighbours = graph.out_vertices(vertex);
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }

    let joined = neighbours
        .iter()
        .enumerate()
        .flat_map(|(offset, &a)| neighbours[offset + 1..].iter().map(move |&b| (a, b)))
        .filter(|&(a, b)| graph.get_edge(a, b).is_some())
        .count();
    let possible = degree * (degree - 1) / 2;
    joined as f64 / possible as f64
}

/// Returns `(vertex, coefficient)` for every vertex in handle order.
#[must_use]
pub fn local_clustering_coefficients(graph: &Graph) -> Vec<(VertexId, f64)> {
    graph
        .vertex_ids()
        .map(|vertex| (vertex, local_clustering(graph, vertex)))
        .collect()
}

/// Mean of the local clustering coefficients over all vertices.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when the graph has no vertices.
#[instrument(
    name = "metrics.clustering",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn clustering_coefficient(graph: &Graph) -> Result<f64> {
    if graph.is_empty() {
        let err = GraphError::EmptyGraph;
        warn!(code = %err.code(), "clustering needs at least one vertex");
        return Err(err);
    }

    let sum: f64 = graph
        .vertex_ids()
        .map(|vertex| local_clustering(graph, vertex))
        .sum();
    let coefficient = sum / graph.vertex_count() as f64;
    debug!(coefficient, "clustering coefficient computed");
    Ok(coefficient)
}
