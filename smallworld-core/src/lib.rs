//! Smallworld core library.
//!
//! Builds undirected graphs for network-science experiments and measures
//! their structure. A [`Graph`] is populated by one of three generators
//! ([`add_regular_edges`], [`add_random_edges`], [`rewire`]) and then
//! analysed read-only by the metrics ([`characteristic_path_length`],
//! [`clustering_coefficient`]).
//!
//! Randomised generators never touch global state: callers inject the random
//! source, so a seeded [`rand::rngs::SmallRng`] reproduces a graph exactly.
//!
//! # Examples
//! ```
//! use rand::{SeedableRng, rngs::SmallRng};
//! use smallworld_core::{
//!     RewireParams, characteristic_path_length, clustering_coefficient, rewire, ring_lattice,
//! };
//!
//! let mut graph = ring_lattice(20, 4).expect("20 vertices admit degree 4");
//! let lattice_clustering = clustering_coefficient(&graph).expect("graph is not empty");
//! assert!((lattice_clustering - 0.5).abs() < 1e-12);
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let params = RewireParams::new(0.2).expect("probability is within [0, 1]");
//! rewire(&mut graph, &params, &mut rng).expect("rewiring succeeds on a sparse ring");
//! assert_eq!(graph.edge_count(), 40);
//! assert!(characteristic_path_length(&graph).is_ok());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generators;
mod graph;
mod metrics;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    generators::{
        DEFAULT_MAX_REWIRE_ATTEMPTS, EdgeProbability, RewireParams, RewireSummary,
        add_random_edges, add_regular_edges, random_graph, rewire, ring_lattice,
    },
    graph::{Edge, Graph, Vertex, VertexId},
    metrics::{
        Averaging, UNREACHABLE, characteristic_path_length, characteristic_path_length_with,
        clustering_coefficient, local_clustering, local_clustering_coefficients, shortest_path,
        shortest_path_length,
    },
};
