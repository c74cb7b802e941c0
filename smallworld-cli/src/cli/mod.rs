//! Command-line interface for the topology comparison experiments.
//!
//! `compare` contrasts a ring lattice with a random graph of similar density;
//! `small-world` contrasts a ring lattice with its Watts–Strogatz rewiring.
//! Both print the characteristic path length followed by the clustering
//! coefficient for each graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, CompareCommand, ExecutionSummary, GraphArgs, GraphMetrics,
    GraphReport, SmallWorldCommand, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
