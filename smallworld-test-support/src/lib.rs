//! Shared test utilities used across the smallworld crates.

pub mod ci;
pub mod tracing;
