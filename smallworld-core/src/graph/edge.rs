//! Undirected edge value object.

use std::fmt;

use crate::{Result, error::GraphError, graph::VertexId};

/// An unordered connection between two distinct vertices.
///
/// Endpoints are stored normalised (smaller handle first) so derived
/// equality, ordering and hashing ignore argument order.
///
/// # Examples
/// ```
/// use smallworld_core::{Edge, VertexId};
///
/// let a = VertexId::new(0);
/// let b = VertexId::new(1);
/// let edge = Edge::new(b, a).expect("endpoints differ");
/// assert_eq!(edge, Edge::new(a, b).expect("endpoints differ"));
/// assert_eq!(edge.endpoints(), (a, b));
/// assert!(Edge::new(a, a).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Joins `a` and `b`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when `a == b`.
    pub fn new(a: VertexId, b: VertexId) -> Result<Self> {
        if a == b {
            return Err(GraphError::InvalidEdge {
                reason: format!("endpoints must be distinct (both are {a})"),
            });
        }
        Ok(Self::ordered(a.min(b), a.max(b)))
    }

    /// Builds an edge from an endpoint list, which must hold exactly two
    /// distinct vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when the slice does not hold
    /// exactly two entries or both entries are equal.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::{Edge, GraphError, VertexId};
    ///
    /// let ids = [VertexId::new(0), VertexId::new(1), VertexId::new(2)];
    /// assert!(Edge::try_from_endpoints(&ids[..2]).is_ok());
    /// assert!(matches!(
    ///     Edge::try_from_endpoints(&ids),
    ///     Err(GraphError::InvalidEdge { .. })
    /// ));
    /// ```
    pub fn try_from_endpoints(endpoints: &[VertexId]) -> Result<Self> {
        match endpoints {
            [a, b] => Self::new(*a, *b),
            other => Err(GraphError::InvalidEdge {
                reason: format!("edges connect exactly two vertices (got {})", other.len()),
            }),
        }
    }

    /// Callers guarantee `low < high`.
    pub(crate) const fn ordered(low: VertexId, high: VertexId) -> Self {
        Self { low, high }
    }

    /// Returns both endpoints, smaller handle first.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Reports whether `vertex` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.low == vertex || self.high == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl TryFrom<(VertexId, VertexId)> for Edge {
    type Error = GraphError;

    fn try_from((a, b): (VertexId, VertexId)) -> Result<Self> {
        Self::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.low, self.high)
    }
}
