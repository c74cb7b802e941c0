//! Unit tests for argument parsing, command execution and rendering.

use super::commands::{run_compare, run_small_world};
use super::{
    Cli, CliError, Command, CompareCommand, ExecutionSummary, GraphArgs, GraphMetrics,
    GraphReport, SmallWorldCommand, render_summary, run_cli,
};

use std::num::NonZeroUsize;

use clap::Parser;
use rstest::{fixture, rstest};
use smallworld_core::{GraphError, RewireSummary};
use smallworld_test_support::tracing::RecordingLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn small_graph() -> GraphArgs {
    GraphArgs {
        vertices: 30,
        degree: 4,
        probability: 0.2,
        seed: 7,
        floor_average: false,
    }
}

#[rstest]
fn missing_subcommand_defaults_to_compare() -> TestResult {
    let cli = Cli::try_parse_from(["smallworld"])?;
    assert!(cli.command.is_none());

    let summary = run_cli(cli)?;
    let names: Vec<&str> = summary.reports.iter().map(|report| report.name).collect();
    assert_eq!(names, ["Regular", "Random"]);
    assert!(summary.rewiring.is_none());
    Ok(())
}

#[rstest]
fn compare_flags_override_defaults() -> TestResult {
    let cli = Cli::try_parse_from([
        "smallworld",
        "compare",
        "--vertices",
        "30",
        "--degree",
        "6",
        "--probability",
        "0.3",
        "--seed",
        "9",
        "--floor-average",
    ])?;
    let Some(Command::Compare(CompareCommand { graph })) = cli.command else {
        panic!("expected the compare command");
    };
    assert_eq!(
        graph,
        GraphArgs {
            vertices: 30,
            degree: 6,
            probability: 0.3,
            seed: 9,
            floor_average: true,
        }
    );
    Ok(())
}

#[rstest]
fn small_world_parses_attempt_cap() -> TestResult {
    let cli = Cli::try_parse_from(["smallworld", "small-world", "--max-attempts", "25"])?;
    let Some(Command::SmallWorld(command)) = cli.command else {
        panic!("expected the small-world command");
    };
    assert_eq!(command.max_attempts.get(), 25);
    assert_eq!(command.graph, GraphArgs::default());
    Ok(())
}

#[rstest]
#[case::zero_attempts(&["smallworld", "small-world", "--max-attempts", "0"])]
#[case::negative_vertices(&["smallworld", "compare", "--vertices", "-4"])]
#[case::unknown_command(&["smallworld", "plot"])]
fn clap_rejects_malformed_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn compare_reports_lattice_then_random(small_graph: GraphArgs) -> TestResult {
    let summary = run_compare(&CompareCommand { graph: small_graph })?;
    assert_eq!(summary.reports.len(), 2);

    let regular = &summary.reports[0];
    assert_eq!(regular.name, "Regular");
    assert_eq!(regular.metrics.clustering, 0.5);
    assert!(regular.metrics.path_length > 1.0);
    assert_eq!(summary.reports[1].name, "Random");
    Ok(())
}

#[rstest]
fn compare_is_reproducible_for_a_seed(small_graph: GraphArgs) -> TestResult {
    let first = run_compare(&CompareCommand {
        graph: small_graph.clone(),
    })?;
    let second = run_compare(&CompareCommand { graph: small_graph })?;
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn floor_average_reports_whole_numbers(mut small_graph: GraphArgs) -> TestResult {
    small_graph.floor_average = true;
    let summary = run_compare(&CompareCommand { graph: small_graph })?;
    for report in &summary.reports {
        assert_eq!(report.metrics.path_length, report.metrics.path_length.floor());
    }
    Ok(())
}

#[rstest]
fn small_world_without_rewiring_matches_the_lattice(mut small_graph: GraphArgs) -> TestResult {
    small_graph.probability = 0.0;
    let summary = run_small_world(&SmallWorldCommand {
        graph: small_graph,
        ..SmallWorldCommand::default()
    })?;
    assert_eq!(summary.reports[0].metrics, summary.reports[1].metrics);
    assert_eq!(summary.reports[1].name, "Small-world");
    assert_eq!(
        summary.rewiring,
        Some(RewireSummary {
            examined: 60,
            rewired: 0
        })
    );
    Ok(())
}

#[rstest]
fn invalid_probability_surfaces_the_graph_error(mut small_graph: GraphArgs) {
    small_graph.probability = 1.5;
    let err = run_compare(&CompareCommand { graph: small_graph })
        .expect_err("probability above one must fail");
    let CliError::Graph(graph) = err;
    assert_eq!(graph, GraphError::InvalidProbability { value: 1.5 });
    assert_eq!(graph.code().as_str(), "SMALLWORLD_INVALID_PROBABILITY");
}

#[rstest]
fn impossible_lattice_surfaces_the_graph_error(mut small_graph: GraphArgs) {
    small_graph.vertices = 5;
    small_graph.degree = 3;
    let err = run_small_world(&SmallWorldCommand {
        graph: small_graph,
        max_attempts: NonZeroUsize::MIN,
    })
    .expect_err("odd degree sum must fail");
    let CliError::Graph(graph) = err;
    assert!(matches!(graph, GraphError::InvalidDegree { .. }));
}

#[rstest]
fn render_summary_prints_one_line_per_graph() -> TestResult {
    let summary = ExecutionSummary {
        reports: vec![
            GraphReport {
                name: "Regular",
                metrics: GraphMetrics {
                    path_length: 13.0,
                    clustering: 0.5,
                },
            },
            GraphReport {
                name: "Small-world",
                metrics: GraphMetrics {
                    path_length: 5.25,
                    clustering: 0.375,
                },
            },
        ],
        rewiring: Some(RewireSummary {
            examined: 200,
            rewired: 31,
        }),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer)?,
        "Regular graph: 13.0 0.5\nSmall-world graph: 5.25 0.375\nRewired edges: 31 of 200\n"
    );
    Ok(())
}

#[rstest]
fn run_cli_records_the_command(small_graph: GraphArgs) -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        command: Some(Command::SmallWorld(SmallWorldCommand {
            graph: small_graph,
            ..SmallWorldCommand::default()
        })),
    };
    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let run = layer.span("cli.run").ok_or("cli.run span must exist")?;
    assert_eq!(run.field("command"), Some("small-world"));
    let small_world = layer
        .span("cli.small_world")
        .ok_or("cli.small_world span must exist")?;
    assert_eq!(small_world.field("vertices"), Some("30"));
    assert_eq!(small_world.field("seed"), Some("7"));
    assert!(layer.span("generators.rewire").is_some());
    assert!(layer.has_event(Level::INFO, "rewiring completed"));
    Ok(())
}

#[rstest]
fn failed_commands_are_logged_at_error(mut small_graph: GraphArgs) {
    small_graph.vertices = 1;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        command: Some(Command::Compare(CompareCommand { graph: small_graph })),
    };
    let result = tracing::subscriber::with_default(subscriber, || run_cli(cli));
    assert!(result.is_err());
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == Level::ERROR)
    );
}
