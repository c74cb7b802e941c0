//! Undirected simple graph over labeled vertices.
//!
//! Vertices live in an arena and are addressed by dense [`VertexId`] handles,
//! so ring positions used by the generators are plain index arithmetic. Each
//! vertex owns an ordered map from neighbour to the [`Edge`] joining them;
//! both directions always hold the same edge value.

mod core;
mod edge;
mod vertex;

pub use self::{core::Graph, edge::Edge, vertex::Vertex, vertex::VertexId};
