//! Breadth-first shortest paths and the characteristic path length.
//!
//! Path lengths count **vertices**, not edges: a vertex's path to itself has
//! length 1 and adjacent vertices are 2 apart. Unreachable pairs report
//! [`UNREACHABLE`] and take part in the average with that value.

use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::{Graph, Result, VertexId, error::GraphError};

/// Length reported for a pair of vertices with no connecting path.
pub const UNREACHABLE: i64 = -1;

/// How [`characteristic_path_length_with`] turns the pair sum into a mean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Averaging {
    /// Floating-point mean.
    #[default]
    Exact,
    /// Integer sum floor-divided by the pair count, then widened to `f64`.
    Floor,
}

impl Averaging {
    fn mean(self, total: i64, pairs: usize) -> f64 {
        let divisor = i64::try_from(pairs).unwrap_or(i64::MAX);
        match self {
            Self::Exact => total as f64 / divisor as f64,
            Self::Floor => total.div_euclid(divisor) as f64,
        }
    }
}

/// Breadth-first search state rooted at a single source.
struct Traversal {
    depth: Vec<Option<usize>>,
    predecessor: Vec<Option<VertexId>>,
}

impl Traversal {
    /// Explores from `source`, stopping once `goal` is dequeued. `source`
    /// must belong to `graph`.
    fn run(graph: &Graph, source: VertexId, goal: Option<VertexId>) -> Self {
        let count = graph.vertex_count();
        let mut depth = vec![None; count];
        let mut predecessor = vec![None; count];
        depth[source.index()] = Some(0);
        let mut frontier = VecDeque::from([source]);

        while let Some(current) = frontier.pop_front() {
            if goal == Some(current) {
                break;
            }
            let next = depth[current.index()].map_or(1, |d: usize| d + 1);
            for neighbour in graph.neighbours(current) {
                let slot = &mut depth[neighbour.index()];
                if slot.is_some() {
                    continue;
                }
                *slot = Some(next);
                predecessor[neighbour.index()] = Some(current);
                frontier.push_back(neighbour);
            }
        }

        Self { depth, predecessor }
    }

    fn reached(&self, vertex: VertexId) -> bool {
        self.depth.get(vertex.index()).is_some_and(Option::is_some)
    }

    fn path_to(&self, goal: VertexId) -> Option<Vec<VertexId>> {
        if !self.reached(goal) {
            return None;
        }
        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(previous) = self.predecessor[cursor.index()] {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();
        Some(path)
    }

    fn path_vertices(&self, goal: VertexId) -> i64 {
        match self.depth.get(goal.index()).copied().flatten() {
            Some(depth) => i64::try_from(depth + 1).unwrap_or(i64::MAX),
            None => UNREACHABLE,
        }
    }
}

/// Returns a shortest path from `source` to `goal`, both included.
///
/// Yields `None` when `goal` is unreachable or either vertex does not belong
/// to `graph`.
///
/// # Examples
/// ```
/// use smallworld_core::{VertexId, ring_lattice, shortest_path};
///
/// let graph = ring_lattice(8, 2).expect("valid lattice");
/// let path = shortest_path(&graph, VertexId::new(0), VertexId::new(3))
///     .expect("ring is connected");
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.first(), Some(&VertexId::new(0)));
/// assert_eq!(path.last(), Some(&VertexId::new(3)));
/// ```
#[must_use]
pub fn shortest_path(graph: &Graph, source: VertexId, goal: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(source) || !graph.contains_vertex(goal) {
        return None;
    }
    Traversal::run(graph, source, Some(goal)).path_to(goal)
}

/// Returns the number of vertices on a shortest path from `source` to
/// `goal`, or [`UNREACHABLE`].
///
/// A vertex is at length 1 from itself.
#[must_use]
pub fn shortest_path_length(graph: &Graph, source: VertexId, goal: VertexId) -> i64 {
    if !graph.contains_vertex(source) || !graph.contains_vertex(goal) {
        return UNREACHABLE;
    }
    Traversal::run(graph, source, Some(goal)).path_vertices(goal)
}

/// Averages [`shortest_path_length`] over every unordered pair of distinct
/// vertices using [`Averaging::Exact`].
///
/// # Errors
/// Returns [`GraphError::InsufficientVertices`] when the graph has fewer than
/// two vertices.
///
/// # Examples
/// ```
/// use smallworld_core::{Graph, characteristic_path_length};
///
/// let mut graph = Graph::with_vertices(["a", "b", "c"]);
/// graph.add_all_edges();
/// assert_eq!(characteristic_path_length(&graph), Ok(2.0));
/// ```
pub fn characteristic_path_length(graph: &Graph) -> Result<f64> {
    characteristic_path_length_with(graph, Averaging::Exact)
}

/// Averages [`shortest_path_length`] over every unordered pair of distinct
/// vertices using the requested `averaging`.
///
/// One traversal runs per source vertex, so the whole graph costs
/// `O(V · (V + E))`.
///
/// # Errors
/// Returns [`GraphError::InsufficientVertices`] when the graph has fewer than
/// two vertices.
#[instrument(
    name = "metrics.path_length",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn characteristic_path_length_with(graph: &Graph, averaging: Averaging) -> Result<f64> {
    let count = graph.vertex_count();
    if count < 2 {
        let err = GraphError::InsufficientVertices {
            required: 2,
            actual: count,
        };
        warn!(code = %err.code(), "path length needs at least one vertex pair");
        return Err(err);
    }

    let mut total = 0_i64;
    for source in graph.vertex_ids() {
        let traversal = Traversal::run(graph, source, None);
        total += ((source.index() + 1)..count)
            .map(|goal| traversal.path_vertices(VertexId::new(goal)))
            .sum::<i64>();
    }

    let pairs = count * (count - 1) / 2;
    let mean = averaging.mean(total, pairs);
    debug!(total, pairs, mean, "characteristic path length computed");
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn id(index: usize) -> VertexId {
        VertexId::new(index)
    }

    #[fixture]
    fn path_of_four() -> Graph {
        let mut graph = Graph::with_vertices(["a", "b", "c", "d"]);
        for (a, b) in [(0, 1), (1, 2), (2, 3)] {
            graph.connect(id(a), id(b)).expect("path endpoints exist");
        }
        graph
    }

    #[rstest]
    fn path_to_self_has_one_vertex(path_of_four: Graph) {
        assert_eq!(shortest_path(&path_of_four, id(2), id(2)), Some(vec![id(2)]));
        assert_eq!(shortest_path_length(&path_of_four, id(2), id(2)), 1);
    }

    #[rstest]
    fn path_walks_the_chain(path_of_four: Graph) {
        assert_eq!(
            shortest_path(&path_of_four, id(3), id(0)),
            Some(vec![id(3), id(2), id(1), id(0)])
        );
        assert_eq!(shortest_path_length(&path_of_four, id(0), id(3)), 4);
    }

    #[rstest]
    fn unreachable_and_absent_goals_report_the_sentinel(mut path_of_four: Graph) {
        let island = path_of_four.add_vertex("island");
        assert_eq!(shortest_path(&path_of_four, id(0), island), None);
        assert_eq!(shortest_path_length(&path_of_four, id(0), island), UNREACHABLE);
        assert_eq!(shortest_path(&path_of_four, id(0), id(40)), None);
        assert_eq!(shortest_path_length(&path_of_four, id(40), id(0)), UNREACHABLE);
    }

    #[test]
    fn shortcut_is_preferred_over_the_ring() {
        let mut graph = Graph::with_vertices((0..10).map(|i| i.to_string()));
        for index in 0..10 {
            graph
                .connect(id(index), id((index + 1) % 10))
                .expect("ring endpoints exist");
        }
        graph.connect(id(0), id(5)).expect("chord endpoints exist");
        assert_eq!(shortest_path_length(&graph, id(0), id(5)), 2);
        assert_eq!(shortest_path_length(&graph, id(1), id(6)), 4);
    }

    #[rstest]
    fn floor_averaging_truncates_the_mean(path_of_four: Graph) {
        // Pair lengths: 2, 3, 4, 2, 3, 2 over six pairs.
        let exact = characteristic_path_length(&path_of_four).expect("four vertices");
        assert!((exact - 16.0 / 6.0).abs() < 1e-12);
        assert_eq!(
            characteristic_path_length_with(&path_of_four, Averaging::Floor),
            Ok(2.0)
        );
    }

    #[rstest]
    #[case(Averaging::Exact)]
    #[case(Averaging::Floor)]
    fn complete_graphs_average_two(#[case] averaging: Averaging) {
        let mut graph = Graph::with_vertices((0..9).map(|i| i.to_string()));
        graph.add_all_edges();
        assert_eq!(characteristic_path_length_with(&graph, averaging), Ok(2.0));
    }

    #[test]
    fn unreachable_pairs_pull_the_average_down() {
        let mut graph = Graph::with_vertices(["a", "b", "c"]);
        graph.connect(id(0), id(1)).expect("endpoints exist");
        // 2 + (-1) + (-1) over three pairs.
        assert_eq!(characteristic_path_length(&graph), Ok(0.0));

        let edgeless = Graph::with_vertices(["x", "y"]);
        assert_eq!(characteristic_path_length(&edgeless), Ok(-1.0));
    }

    #[test]
    fn floor_rounds_negative_sums_downwards() {
        let mut graph = Graph::with_vertices(["a", "b", "c", "d"]);
        graph.connect(id(0), id(1)).expect("endpoints exist");
        // 2 + five unreachable pairs = -3 over six pairs.
        let exact = characteristic_path_length(&graph).expect("four vertices");
        assert!((exact + 0.5).abs() < 1e-12);
        assert_eq!(
            characteristic_path_length_with(&graph, Averaging::Floor),
            Ok(-1.0)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn tiny_graphs_have_no_pairs(#[case] vertices: usize) {
        let graph = Graph::with_vertices((0..vertices).map(|i| i.to_string()));
        assert_eq!(
            characteristic_path_length(&graph),
            Err(GraphError::InsufficientVertices {
                required: 2,
                actual: vertices,
            })
        );
    }
}
