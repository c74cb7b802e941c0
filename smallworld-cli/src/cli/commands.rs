//! Command implementations and argument parsing for the smallworld CLI.

use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{
    Averaging, DEFAULT_MAX_REWIRE_ATTEMPTS, EdgeProbability, Graph, GraphError, RewireParams,
    RewireSummary, characteristic_path_length_with, clustering_coefficient, random_graph, rewire,
    ring_lattice,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_VERTICES: usize = 100;
const DEFAULT_DEGREE: usize = 4;
const DEFAULT_PROBABILITY: f64 = 0.15;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_REWIRE_ATTEMPTS) {
    Some(attempts) => attempts,
    None => NonZeroUsize::MIN,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "smallworld",
    about = "Compare regular, random and small-world graph topologies."
)]
pub struct Cli {
    /// Command to execute; `compare` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compare a ring lattice with a random graph.
    Compare(CompareCommand),
    /// Compare a ring lattice with its Watts–Strogatz rewiring.
    SmallWorld(SmallWorldCommand),
}

/// Graph shape and sampling options shared by every command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct GraphArgs {
    /// Number of vertices in each graph.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Degree of the ring lattice.
    #[arg(long, default_value_t = DEFAULT_DEGREE)]
    pub degree: usize,

    /// Edge probability of the random graph, or rewiring probability of the
    /// small-world graph.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Seed for the random source.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Floor-divide the summed path lengths instead of taking the exact mean.
    #[arg(long)]
    pub floor_average: bool,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            degree: DEFAULT_DEGREE,
            probability: DEFAULT_PROBABILITY,
            seed: DEFAULT_SEED,
            floor_average: false,
        }
    }
}

impl GraphArgs {
    fn averaging(&self) -> Averaging {
        if self.floor_average {
            Averaging::Floor
        } else {
            Averaging::Exact
        }
    }

    fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed)
    }
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone, Default, PartialEq)]
pub struct CompareCommand {
    /// Graph options.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Options accepted by the `small-world` command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct SmallWorldCommand {
    /// Graph options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Candidate draws allowed per rewired edge.
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub max_attempts: NonZeroUsize,
}

impl Default for SmallWorldCommand {
    fn default() -> Self {
        Self {
            graph: GraphArgs::default(),
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation or measurement failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Path length and clustering of one graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphMetrics {
    /// Characteristic path length, in vertices per path.
    pub path_length: f64,
    /// Mean local clustering coefficient.
    pub clustering: f64,
}

/// Metrics of one named graph in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReport {
    /// Name printed before the metrics.
    pub name: &'static str,
    /// Measured values.
    pub metrics: GraphMetrics,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Graph reports in print order.
    pub reports: Vec<GraphReport>,
    /// Rewiring outcome, for the `small-world` command.
    pub rewiring: Option<RewireSummary>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a graph cannot be generated or measured.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::{Cli, Command, CompareCommand, GraphArgs, run_cli};
///
/// let cli = Cli {
///     command: Some(Command::Compare(CompareCommand {
///         graph: GraphArgs { vertices: 20, ..GraphArgs::default() },
///     })),
/// };
/// let summary = run_cli(cli).expect("defaults are valid");
/// assert_eq!(summary.reports[0].name, "Regular");
/// assert_eq!(summary.reports[0].metrics.clustering, 0.5);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command.unwrap_or_else(|| Command::Compare(CompareCommand::default())) {
        Command::Compare(command) => {
            span.record("command", field::display("compare"));
            run_compare(&command)
        }
        Command::SmallWorld(command) => {
            span.record("command", field::display("small-world"));
            run_small_world(&command)
        }
    }
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(
        vertices = command.graph.vertices,
        degree = command.graph.degree,
        probability = command.graph.probability,
        seed = command.graph.seed,
    ),
)]
pub(super) fn run_compare(command: &CompareCommand) -> Result<ExecutionSummary, CliError> {
    let args = &command.graph;
    let probability = EdgeProbability::new(args.probability)?;

    let regular = ring_lattice(args.vertices, args.degree)?;
    let random = random_graph(args.vertices, probability, &mut args.rng())?;
    info!(
        regular_edges = regular.edge_count(),
        random_edges = random.edge_count(),
        "graphs generated"
    );

    Ok(ExecutionSummary {
        reports: vec![
            report("Regular", &regular, args.averaging())?,
            report("Random", &random, args.averaging())?,
        ],
        rewiring: None,
    })
}

#[instrument(
    name = "cli.small_world",
    err,
    skip(command),
    fields(
        vertices = command.graph.vertices,
        degree = command.graph.degree,
        probability = command.graph.probability,
        seed = command.graph.seed,
    ),
)]
pub(super) fn run_small_world(command: &SmallWorldCommand) -> Result<ExecutionSummary, CliError> {
    let args = &command.graph;
    let params = RewireParams::new(args.probability)?.with_max_attempts(command.max_attempts);

    let regular = ring_lattice(args.vertices, args.degree)?;
    let lattice_report = report("Regular", &regular, args.averaging())?;

    let mut small_world = regular;
    let rewiring = rewire(&mut small_world, &params, &mut args.rng())?;

    Ok(ExecutionSummary {
        reports: vec![
            lattice_report,
            report("Small-world", &small_world, args.averaging())?,
        ],
        rewiring: Some(rewiring),
    })
}

fn report(
    name: &'static str,
    graph: &Graph,
    averaging: Averaging,
) -> Result<GraphReport, CliError> {
    let metrics = GraphMetrics {
        path_length: characteristic_path_length_with(graph, averaging)?,
        clustering: clustering_coefficient(graph)?,
    };
    Ok(GraphReport { name, metrics })
}

/// Renders `summary` to `writer`, one `<name> graph: <path length>
/// <clustering>` line per graph.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::{ExecutionSummary, GraphMetrics, GraphReport, render_summary};
///
/// let summary = ExecutionSummary {
///     reports: vec![GraphReport {
///         name: "Regular",
///         metrics: GraphMetrics { path_length: 13.0, clustering: 0.5 },
///     }],
///     rewiring: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(String::from_utf8_lossy(&buffer), "Regular graph: 13.0 0.5\n");
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for GraphReport { name, metrics } in &summary.reports {
        writeln!(
            writer,
            "{name} graph: {:?} {:?}",
            metrics.path_length, metrics.clustering
        )?;
    }
    if let Some(rewiring) = summary.rewiring {
        writeln!(
            writer,
            "Rewired edges: {} of {}",
            rewiring.rewired, rewiring.examined
        )?;
    }
    Ok(())
}
