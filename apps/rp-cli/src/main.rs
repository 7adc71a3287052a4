use std::collections::BTreeSet;

use clap::{Args, Parser, Subcommand};
use rp_core::{RpError, RpResult, Weight};
use rp_graph::{Graph, PassLimit, RelaxConfig, ShortestPath};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "rp-cli")]
#[command(about = "RelaxPath CLI - shortest paths over weighted directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve on the built-in five-node sample graph
    Demo {
        /// Start node identifier
        #[arg(long, default_value = "A")]
        start: String,
        /// End node identifier
        #[arg(long, default_value = "E")]
        end: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Solve on a graph described by command-line arguments
    Path {
        /// Node identifier (repeatable); defaults to every edge endpoint
        #[arg(long = "node")]
        nodes: Vec<String>,
        /// Directed edge as FROM:TO:WEIGHT (repeatable)
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<EdgeArg>,
        /// Start node identifier
        start: String,
        /// End node identifier
        end: String,
        /// Maximum relaxation passes before giving up
        #[arg(long, conflicts_with = "unbounded")]
        max_passes: Option<usize>,
        /// Relax until convergence with no pass limit
        #[arg(long)]
        unbounded: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Debug)]
struct EdgeArg {
    from: String,
    to: String,
    weight: Weight,
}

#[derive(Serialize)]
struct Report<'a> {
    start: &'a str,
    end: &'a str,
    #[serde(flatten)]
    result: &'a ShortestPath,
}

fn parse_edge(raw: &str) -> Result<EdgeArg, String> {
    let mut parts = raw.splitn(3, ':');
    let (Some(from), Some(to), Some(weight)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected FROM:TO:WEIGHT, got '{}'", raw));
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty endpoint in '{}'", raw));
    }
    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|e| format!("invalid weight in '{}': {}", raw, e))?;
    Ok(EdgeArg {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

fn main() -> RpResult<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { start, end, output } => cmd_demo(&start, &end, output.json),
        Commands::Path {
            nodes,
            edges,
            start,
            end,
            max_passes,
            unbounded,
            output,
        } => {
            let config = relax_config(max_passes, unbounded);
            let graph = graph_from_args(&nodes, &edges);
            cmd_solve(&graph, &start, &end, &config, output.json)
        }
    }
}

fn relax_config(max_passes: Option<usize>, unbounded: bool) -> RelaxConfig {
    let pass_limit = match (max_passes, unbounded) {
        (_, true) => PassLimit::Unbounded,
        (Some(n), false) => PassLimit::Fixed(n),
        (None, false) => PassLimit::NodeCount,
    };
    RelaxConfig { pass_limit }
}

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        graph.add_node(id);
    }
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "C", 2);
    graph.add_edge("A", "D", 4);
    graph.add_edge("D", "E", 5);
    graph.add_edge("B", "E", 6);
    graph
}

fn graph_from_args(nodes: &[String], edges: &[EdgeArg]) -> Graph {
    let mut graph = Graph::new();
    if nodes.is_empty() {
        let endpoints: BTreeSet<&str> = edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .collect();
        for id in endpoints {
            graph.add_node(id);
        }
    } else {
        for id in nodes {
            graph.add_node(id.as_str());
        }
    }

    for edge in edges {
        if !graph.add_edge(&edge.from, &edge.to, edge.weight) {
            tracing::warn!(
                from = %edge.from,
                to = %edge.to,
                "edge ignored: endpoint is not a declared node"
            );
        }
    }
    graph
}

fn cmd_demo(start: &str, end: &str, json: bool) -> RpResult<()> {
    cmd_solve(&sample_graph(), start, end, &RelaxConfig::default(), json)
}

fn cmd_solve(
    graph: &Graph,
    start: &str,
    end: &str,
    config: &RelaxConfig,
    json: bool,
) -> RpResult<()> {
    let result = graph.find_shortest_path_with(start, end, config)?;

    if json {
        let report = Report {
            start,
            end,
            result: &result,
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| RpError::Output {
            what: e.to_string(),
        })?;
        println!("{}", text);
    } else {
        println!("Shortest path: [{}]", result.path.join(", "));
        println!("Distance: {}", result.distance);
    }
    Ok(())
}
