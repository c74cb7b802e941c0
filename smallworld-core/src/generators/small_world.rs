//! Watts–Strogatz rewiring of a ring lattice.
//!
//! The rewirer walks the lattice one ring distance at a time. At distance
//! `offset` every vertex considers the edge to its clockwise neighbour at
//! that distance and, with the configured probability, moves the far end of
//! that edge to a uniformly chosen vertex. The new endpoint must not create a
//! self-loop or a duplicate edge, and must differ from the old endpoint.
//!
//! Candidate sampling is bounded by [`RewireParams::max_attempts`]; when a
//! vertex has no legal target at all the rewirer fails immediately instead
//! of sampling.

use std::num::NonZeroUsize;

use rand::Rng;
use tracing::{info, instrument, trace, warn};

use crate::{Edge, Graph, Result, VertexId, error::GraphError};

use super::EdgeProbability;

/// Candidate draws allowed per rewired edge unless overridden.
pub const DEFAULT_MAX_REWIRE_ATTEMPTS: usize = 10_000;

const DEFAULT_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_REWIRE_ATTEMPTS) {
    Some(attempts) => attempts,
    None => NonZeroUsize::MIN,
};

/// Configuration for [`rewire`].
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use smallworld_core::{DEFAULT_MAX_REWIRE_ATTEMPTS, RewireParams};
///
/// let params = RewireParams::new(0.1).expect("valid probability");
/// assert_eq!(params.max_attempts().get(), DEFAULT_MAX_REWIRE_ATTEMPTS);
///
/// let capped = params.with_max_attempts(NonZeroUsize::new(16).expect("non-zero"));
/// assert_eq!(capped.max_attempts().get(), 16);
/// assert_eq!(capped.probability().get(), 0.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewireParams {
    probability: EdgeProbability,
    max_attempts: NonZeroUsize,
}

impl RewireParams {
    /// Creates parameters that rewire each lattice edge with probability
    /// `probability`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self::from_probability(EdgeProbability::new(probability)?))
    }

    /// Creates parameters from an already validated probability.
    #[must_use]
    pub const fn from_probability(probability: EdgeProbability) -> Self {
        Self {
            probability,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }

    /// Caps the candidate draws spent on a single edge.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: NonZeroUsize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Returns the per-edge rewiring probability.
    #[must_use]
    pub const fn probability(&self) -> EdgeProbability {
        self.probability
    }

    /// Returns the candidate draw cap.
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }
}

/// Outcome of a [`rewire`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewireSummary {
    /// Lattice edges considered for rewiring.
    pub examined: usize,
    /// Edges whose far endpoint was moved.
    pub rewired: usize,
}

/// Rewires the ring lattice in `graph` into a Watts–Strogatz small-world
/// graph.
///
/// The lattice degree `k` is read from vertex zero; ring distances
/// `1..=k/2` are processed in turn. For an odd `k` the diametric edges are
/// never considered. Edge count and simplicity are preserved.
///
/// # Errors
/// - [`GraphError::IrregularLattice`] when the vertices do not share one
///   degree; the graph is untouched.
/// - [`GraphError::NoValidRewireTarget`] when a selected edge cannot be
///   moved, either because its source is adjacent to every other vertex or
///   because the attempt cap ran out. The edge being moved is restored;
///   edges rewired earlier in the pass stay rewired.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallworld_core::{RewireParams, rewire, ring_lattice};
///
/// let mut graph = ring_lattice(30, 4).expect("valid lattice");
/// let before = graph.edges();
/// let mut rng = SmallRng::seed_from_u64(5);
///
/// let params = RewireParams::new(0.0).expect("valid probability");
/// let summary = rewire(&mut graph, &params, &mut rng).expect("nothing to move");
/// assert_eq!(summary.rewired, 0);
/// assert_eq!(graph.edges(), before);
/// ```
#[instrument(
    name = "generators.rewire",
    err,
    skip(graph, params, rng),
    fields(
        vertices = graph.vertex_count(),
        probability = params.probability().get(),
        max_attempts = params.max_attempts().get(),
    ),
)]
pub fn rewire<R: Rng + ?Sized>(
    graph: &mut Graph,
    params: &RewireParams,
    rng: &mut R,
) -> Result<RewireSummary> {
    let mut summary = RewireSummary::default();
    let vertices = graph.vertex_count();
    if vertices == 0 {
        return Ok(summary);
    }
    let degree = lattice_degree(graph)
        .inspect_err(|err| warn!(code = %err.code(), "rewiring needs a regular lattice"))?;

    for offset in 1..=degree / 2 {
        for index in 0..vertices {
            let source = VertexId::new(index);
            let neighbour = VertexId::new((index + offset) % vertices);
            let Some(edge) = graph.get_edge(source, neighbour) else {
                trace!(%source, %neighbour, "lattice edge no longer present");
                continue;
            };
            summary.examined += 1;
            if !params.probability().sample(rng) {
                continue;
            }

            let request = RewireRequest {
                edge,
                source,
                neighbour,
            };
            let target = move_far_endpoint(graph, request, params.max_attempts(), rng)?;
            trace!(%source, from = %neighbour, to = %target, offset, "edge rewired");
            summary.rewired += 1;
        }
    }

    info!(
        examined = summary.examined,
        rewired = summary.rewired,
        "rewiring completed"
    );
    Ok(summary)
}

fn lattice_degree(graph: &Graph) -> Result<usize> {
    let expected = graph.degree(VertexId::new(0));
    match graph
        .vertex_ids()
        .find(|&vertex| graph.degree(vertex) != expected)
    {
        Some(vertex) => Err(GraphError::IrregularLattice {
            vertex,
            degree: graph.degree(vertex),
            expected,
        }),
        None => Ok(expected),
    }
}

struct RewireRequest {
    edge: Edge,
    source: VertexId,
    neighbour: VertexId,
}

fn move_far_endpoint<R: Rng + ?Sized>(
    graph: &mut Graph,
    request: RewireRequest,
    max_attempts: NonZeroUsize,
    rng: &mut R,
) -> Result<VertexId> {
    let RewireRequest {
        edge,
        source,
        neighbour,
    } = request;
    let vertices = graph.vertex_count();

    // `neighbour` is still adjacent here, so it is already excluded.
    let legal_targets = vertices.saturating_sub(1 + graph.degree(source));
    if legal_targets == 0 {
        return Err(GraphError::NoValidRewireTarget {
            vertex: source,
            attempts: 0,
        });
    }

    graph.remove_edge(edge);
    for _ in 0..max_attempts.get() {
        let candidate = VertexId::new(rng.gen_range(0..vertices));
        if candidate == source
            || candidate == neighbour
            || graph.get_edge(source, candidate).is_some()
        {
            continue;
        }
        graph.connect(source, candidate)?;
        return Ok(candidate);
    }

    graph.add_edge(edge)?;
    Err(GraphError::NoValidRewireTarget {
        vertex: source,
        attempts: max_attempts.get(),
    })
}
