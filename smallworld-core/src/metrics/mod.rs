//! Structural metrics over a finished [`crate::Graph`].
//!
//! Metrics only read the graph; they never mutate it and never need a random
//! source.

mod clustering;
mod path_length;

pub use self::{
    clustering::{clustering_coefficient, local_clustering, local_clustering_coefficients},
    path_length::{
        Averaging, UNREACHABLE, characteristic_path_length, characteristic_path_length_with,
        shortest_path, shortest_path_length,
    },
};
