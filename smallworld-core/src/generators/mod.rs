//! Graph generators.
//!
//! Each generator is a free function that populates an existing [`crate::Graph`]
//! in place, so the same graph can be built as a ring lattice and then
//! rewired into a small-world graph. Randomised generators take the random
//! source as an argument.

mod probability;
mod random;
mod regular;
mod small_world;

pub use self::{
    probability::EdgeProbability,
    random::{add_random_edges, random_graph},
    regular::{add_regular_edges, ring_lattice},
    small_world::{DEFAULT_MAX_REWIRE_ATTEMPTS, RewireParams, RewireSummary, rewire},
};

use crate::Graph;

/// Creates an edgeless graph whose vertices are labeled `"0"` to `"n-1"`.
fn numbered_vertices(count: usize) -> Graph {
    Graph::with_vertices((0..count).map(|index| index.to_string()))
}
