//! Ring-lattice construction.

use tracing::{debug, instrument, warn};

use crate::{Graph, Result, VertexId, error::GraphError};

use super::numbered_vertices;

/// Connects every vertex of `graph` to its nearest ring neighbours so each
/// vertex ends up with exactly `degree` edges.
///
/// Vertices sit on the ring in handle order. For an even `degree` each vertex
/// joins its `degree / 2` nearest neighbours on both sides. For an odd
/// `degree` it joins `(degree - 1) / 2` per side plus the vertex diametrically
/// opposite, at `(i + n / 2) mod n`.
///
/// # Errors
/// Returns [`GraphError::InvalidDegree`] without touching the graph when the
/// graph has fewer than `degree + 1` vertices or when `n * degree` is odd.
///
/// # Examples
/// ```
/// use smallworld_core::{Graph, add_regular_edges};
///
/// let mut graph = Graph::with_vertices(["a", "b", "c", "d", "e", "f"]);
/// add_regular_edges(&mut graph, 2).expect("six vertices admit degree 2");
/// assert!(graph.is_regular());
/// assert_eq!(graph.edge_count(), 6);
/// ```
#[instrument(
    name = "generators.regular",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn add_regular_edges(graph: &mut Graph, degree: usize) -> Result<()> {
    let vertices = graph.vertex_count();
    validate_degree(vertices, degree)
        .inspect_err(|err| warn!(code = %err.code(), degree, "ring lattice rejected"))?;

    let per_side = degree / 2;
    let with_opposite = degree % 2 == 1;

    for index in 0..vertices {
        let source = VertexId::new(index);
        for step in 1..=per_side {
            let clockwise = (index + step) % vertices;
            let counter_clockwise = (index + vertices - step) % vertices;
            graph.connect(source, VertexId::new(clockwise))?;
            graph.connect(source, VertexId::new(counter_clockwise))?;
        }
        // `n * degree` is even, so an odd degree implies an even ring.
        if with_opposite {
            let opposite = (index + vertices / 2) % vertices;
            graph.connect(source, VertexId::new(opposite))?;
        }
    }

    debug!(edges = graph.edge_count(), "ring lattice built");
    Ok(())
}

fn validate_degree(vertices: usize, degree: usize) -> Result<()> {
    if vertices < degree.saturating_add(1) {
        return Err(GraphError::InvalidDegree {
            vertices,
            degree,
            reason: "a vertex needs at least `degree` distinct neighbours",
        });
    }
    if vertices.saturating_mul(degree) % 2 != 0 {
        return Err(GraphError::InvalidDegree {
            vertices,
            degree,
            reason: "the degree sum `n * degree` must be even",
        });
    }
    Ok(())
}

/// Builds a ring lattice on `vertices` vertices labeled `"0"` to `"n-1"`.
///
/// # Errors
/// Propagates [`GraphError::InvalidDegree`] from [`add_regular_edges`].
///
/// # Examples
/// ```
/// use smallworld_core::ring_lattice;
///
/// let graph = ring_lattice(100, 4).expect("valid lattice");
/// assert_eq!(graph.edge_count(), 200);
/// assert_eq!(graph.vertex_id("42").map(|id| id.index()), Some(42));
/// ```
pub fn ring_lattice(vertices: usize, degree: usize) -> Result<Graph> {
    let mut graph = numbered_vertices(vertices);
    add_regular_edges(&mut graph, degree)?;
    Ok(graph)
}
