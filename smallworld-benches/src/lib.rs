//! Benchmark support crate for smallworld.
//!
//! Provides parameter types and seeded graph fixtures used by the Criterion
//! benchmarks for the graph generators and structural metrics.

pub mod error;
pub mod fixtures;
pub mod params;
