//! Error types for the smallworld core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Every code in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$CodeVariant,)+];

            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, generation and measurement.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge was built from a repeated endpoint or from the wrong number of
    /// endpoints.
    #[error("invalid edge: {reason}")]
    InvalidEdge {
        /// Description of the defect.
        reason: String,
    },
    /// A ring lattice cannot be realised for the requested degree.
    #[error("cannot build a ring lattice of degree {degree} on {vertices} vertices: {reason}")]
    InvalidDegree {
        /// Number of vertices in the graph.
        vertices: usize,
        /// Degree requested by the caller.
        degree: usize,
        /// The violated precondition.
        reason: &'static str,
    },
    /// Rewiring could not find a legal new endpoint for an edge.
    #[error("no valid rewiring target for vertex {vertex} after {attempts} attempts")]
    NoValidRewireTarget {
        /// Vertex whose edge was being rewired.
        vertex: VertexId,
        /// Candidate draws spent before giving up; zero when no legal target
        /// existed at all.
        attempts: usize,
    },
    /// An edge referenced a vertex that was never added to the graph.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// The unknown vertex handle.
        vertex: VertexId,
    },
    /// The operation needs at least one vertex.
    #[error("graph contains no vertices")]
    EmptyGraph,
    /// The operation needs more vertices than the graph holds.
    #[error("graph has {actual} vertices but at least {required} are required")]
    InsufficientVertices {
        /// Minimum number of vertices the operation needs.
        required: usize,
        /// Number of vertices present.
        actual: usize,
    },
    /// A probability was NaN or outside `[0, 1]`.
    #[error("probability must lie within [0, 1] (got {value})")]
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// Rewiring requires every vertex to share the same degree.
    #[error("vertex {vertex} has degree {degree} but the lattice degree is {expected}")]
    IrregularLattice {
        /// First vertex whose degree differs from vertex zero.
        vertex: VertexId,
        /// Degree of that vertex.
        degree: usize,
        /// Degree of vertex zero.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge was built from invalid endpoints.
        InvalidEdge => InvalidEdge { .. } => "SMALLWORLD_INVALID_EDGE",
        /// A ring lattice cannot be realised for the requested degree.
        InvalidDegree => InvalidDegree { .. } => "SMALLWORLD_INVALID_DEGREE",
        /// Rewiring could not find a legal new endpoint.
        NoValidRewireTarget => NoValidRewireTarget { .. } => "SMALLWORLD_NO_REWIRE_TARGET",
        /// An edge referenced an unknown vertex.
        UnknownVertex => UnknownVertex { .. } => "SMALLWORLD_UNKNOWN_VERTEX",
        /// The operation needs at least one vertex.
        EmptyGraph => EmptyGraph => "SMALLWORLD_EMPTY_GRAPH",
        /// The operation needs more vertices than the graph holds.
        InsufficientVertices => InsufficientVertices { .. } => "SMALLWORLD_INSUFFICIENT_VERTICES",
        /// A probability was outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "SMALLWORLD_INVALID_PROBABILITY",
        /// Rewiring was attempted on a graph that is not regular.
        IrregularLattice => IrregularLattice { .. } => "SMALLWORLD_IRREGULAR_LATTICE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
