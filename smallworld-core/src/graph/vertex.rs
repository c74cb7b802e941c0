//! Vertex identity and labels.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Stable handle of a vertex within one [`crate::Graph`].
///
/// Handles are assigned densely in insertion order and never reused, which
/// makes them the ring order used by the lattice generators.
///
/// # Examples
/// ```
/// use smallworld_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "#3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled vertex. Equality and hashing follow the [`VertexId`] only.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    label: Arc<str>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: Arc<str>) -> Self {
        Self { id, label }
    }

    /// Returns the vertex handle.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
