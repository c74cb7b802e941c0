//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Shape of a ring lattice.
#[derive(Clone, Copy, Debug)]
pub struct LatticeBenchParams {
    /// Number of vertices on the ring.
    pub vertices: usize,
    /// Degree of every vertex.
    pub degree: usize,
}

impl fmt::Display for LatticeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertices, self.degree)
    }
}

/// Shape and sampling parameters of a seeded randomised graph.
#[derive(Clone, Copy, Debug)]
pub struct RandomBenchParams {
    /// Underlying lattice shape; random graphs use only the vertex count.
    pub lattice: LatticeBenchParams,
    /// Edge or rewiring probability.
    pub probability: f64,
    /// Seed for the random source.
    pub seed: u64,
}

impl fmt::Display for RandomBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},p={}", self.lattice, self.probability)
    }
}
