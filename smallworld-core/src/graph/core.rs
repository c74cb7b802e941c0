//! Adjacency storage and the invariant-preserving mutators.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, VecDeque},
    mem,
    sync::Arc,
};

use tracing::trace;

use crate::{
    Result,
    error::GraphError,
    graph::{Edge, Vertex, VertexId},
};

/// Undirected simple graph.
///
/// Invariants upheld by every mutator:
/// - if `a` lists `b` as a neighbour then `b` lists `a`, through the same
///   [`Edge`] value;
/// - no self-loops and at most one edge per unordered pair;
/// - vertices are never removed.
///
/// # Examples
/// ```
/// use smallworld_core::{Edge, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let edge = Edge::new(a, b).expect("endpoints differ");
/// graph.add_edge(edge).expect("both endpoints exist");
///
/// assert_eq!(graph.get_edge(b, a), Some(edge));
/// assert_eq!(graph.edges().len(), 1);
/// assert_eq!(graph.remove_edge(edge), Some(edge));
/// assert_eq!(graph.get_edge(a, b), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    labels: HashMap<Arc<str>, VertexId>,
    adjacency: Vec<BTreeMap<VertexId, Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an edgeless graph holding `labels` in iteration order.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let graph = Graph::with_vertices(["x", "y", "z"]);
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_vertices<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Arc<str>>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_vertex(label);
        }
        graph
    }

    /// Adds a vertex labeled `label` and returns its handle.
    ///
    /// Labels identify vertices: adding a label that is already present
    /// returns the existing handle and clears that vertex's adjacency,
    /// detaching it from its former neighbours as well.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex("a");
    /// let b = graph.add_vertex("b");
    /// graph.connect(a, b).expect("both endpoints exist");
    ///
    /// assert_eq!(graph.add_vertex("a"), a);
    /// assert_eq!(graph.degree(a), 0);
    /// assert_eq!(graph.degree(b), 0);
    /// ```
    pub fn add_vertex(&mut self, label: impl Into<Arc<str>>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.labels.get(&label) {
            self.detach(id);
            return id;
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(id, Arc::clone(&label)));
        self.labels.insert(label, id);
        self.adjacency.push(BTreeMap::new());
        id
    }

    fn detach(&mut self, id: VertexId) {
        let Some(slot) = self.adjacency.get_mut(id.index()) else {
            return;
        };
        let former = mem::take(slot);
        if !former.is_empty() {
            trace!(vertex = %id, edges = former.len(), "re-added vertex cleared");
        }
        for neighbour in former.keys() {
            if let Some(entries) = self.adjacency.get_mut(neighbour.index()) {
                entries.remove(&id);
            }
        }
    }

    /// Inserts `edge` in both directions, replacing any edge already joining
    /// the same pair. Returns the replaced edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint was never added
    /// to this graph; the graph is left untouched.
    pub fn add_edge(&mut self, edge: Edge) -> Result<Option<Edge>> {
        let (low, high) = edge.endpoints();
        self.ensure_vertex(low)?;
        self.ensure_vertex(high)?;
        Ok(self.link(edge))
    }

    /// Joins `a` and `b`; shorthand for building the [`Edge`] and calling
    /// [`Self::add_edge`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when `a == b` and
    /// [`GraphError::UnknownVertex`] when either endpoint is absent.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> Result<Option<Edge>> {
        self.add_edge(Edge::new(a, b)?)
    }

    fn ensure_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex { vertex })
        }
    }

    /// Both endpoints must already be present.
    fn link(&mut self, edge: Edge) -> Option<Edge> {
        let (low, high) = edge.endpoints();
        let replaced = self
            .adjacency
            .get_mut(low.index())
            .and_then(|entries| entries.insert(high, edge));
        if let Some(entries) = self.adjacency.get_mut(high.index()) {
            entries.insert(low, edge);
        }
        replaced
    }

    /// Returns the edge joining `a` and `b`, if any.
    #[must_use]
    pub fn get_edge(&self, a: VertexId, b: VertexId) -> Option<Edge> {
        self.adjacency.get(a.index())?.get(&b).copied()
    }

    /// Removes `edge` from both endpoints. Absent edges are ignored and yield
    /// `None`.
    pub fn remove_edge(&mut self, edge: Edge) -> Option<Edge> {
        let (low, high) = edge.endpoints();
        let removed = self
            .adjacency
            .get_mut(low.index())
            .and_then(|entries| entries.remove(&high));
        if let Some(entries) = self.adjacency.get_mut(high.index()) {
            entries.remove(&low);
        }
        removed
    }

    /// Iterates over every vertex in handle order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Iterates over every vertex handle in ring order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Looks up a vertex by handle.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Looks up a vertex handle by label.
    #[must_use]
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label).copied()
    }

    /// Reports whether `vertex` belongs to this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Reports whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the distinct edges, each undirected edge once.
    #[must_use]
    pub fn edges(&self) -> BTreeSet<Edge> {
        self.adjacency
            .iter()
            .flat_map(|entries| entries.values().copied())
            .collect()
    }

    /// Iterates over the neighbours of `vertex` in handle order; empty when
    /// the vertex is absent or isolated.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(vertex.index())
            .into_iter()
            .flat_map(|entries| entries.keys().copied())
    }

    /// Returns the neighbours of `vertex`; empty when the vertex is absent or
    /// isolated.
    #[must_use]
    pub fn out_vertices(&self, vertex: VertexId) -> Vec<VertexId> {
        self.neighbours(vertex).collect()
    }

    /// Returns the edges incident to `vertex`; empty when the vertex is
    /// absent or isolated.
    #[must_use]
    pub fn out_edges(&self, vertex: VertexId) -> Vec<Edge> {
        self.adjacency
            .get(vertex.index())
            .map(|entries| entries.values().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the number of edges incident to `vertex` (zero when absent).
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex.index()).map_or(0, BTreeMap::len)
    }

    /// Joins every pair of distinct vertices, turning the graph complete.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let mut graph = Graph::with_vertices(["a", "b", "c", "d"]);
    /// graph.add_all_edges();
    /// assert_eq!(graph.edge_count(), 6);
    /// assert!(graph.is_regular());
    /// ```
    pub fn add_all_edges(&mut self) {
        let count = self.vertices.len();
        for low in 0..count {
            for high in (low + 1)..count {
                self.link(Edge::ordered(VertexId::new(low), VertexId::new(high)));
            }
        }
    }

    /// Reports whether every vertex has the same degree. Graphs with fewer
    /// than two vertices are trivially regular.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        let mut degrees = self.adjacency.iter().map(BTreeMap::len);
        match degrees.next() {
            Some(first) => degrees.all(|degree| degree == first),
            None => true,
        }
    }

    /// Reports whether a breadth-first walk from the first vertex reaches
    /// every vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the graph has no vertices.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::{Graph, GraphError};
    ///
    /// assert_eq!(Graph::new().is_connected(), Err(GraphError::EmptyGraph));
    ///
    /// let mut graph = Graph::with_vertices(["a", "b"]);
    /// assert_eq!(graph.is_connected(), Ok(false));
    /// graph.add_all_edges();
    /// assert_eq!(graph.is_connected(), Ok(true));
    /// ```
    pub fn is_connected(&self) -> Result<bool> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([VertexId::new(0)]);
        visited[0] = true;
        let mut reached = 1_usize;

        while let Some(current) = queue.pop_front() {
            for neighbour in self.neighbours(current) {
                if visited[neighbour.index()] {
                    continue;
                }
                visited[neighbour.index()] = true;
                reached += 1;
                queue.push_back(neighbour);
            }
        }

        Ok(reached == self.vertices.len())
    }
}
