//! neuronet: load an edge-list dataset and query it from the command line.
//!
//! Wraps neuronet-core: dataset statistics, node of maximum out-degree and
//! depth-bounded BFS with optional JSON export of the explored subgraph.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};
use neuronet_core::{degree_ranking, NodeId, SparseGraph};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod report;
mod session;

use config::{OutputFormat, Settings, DEFAULT_EXPORT_LIMIT, DEFAULT_MAX_DEPTH};
use error::CliError;
use report::{BfsReport, MaxDegreeReport, RankedNode, Render, StatsReport};

#[derive(Parser, Debug)]
#[command(
    name = "neuronet",
    version,
    about = "Query large directed edge-list graphs through a CSR index",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "NEURONET_UNDIRECTED",
        help = "Store the reverse of every edge as well"
    )]
    undirected: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for reports"
    )]
    format: OutputFormat,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log to stderr: -v for load summaries, -vv for build and BFS events"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Node and edge counts, load time, memory and out-degree summary
    Stats {
        #[arg(env = "NEURONET_DATASET", help = "Edge-list file")]
        dataset: PathBuf,
    },
    /// Node with the largest out-degree
    MaxDegree {
        #[arg(env = "NEURONET_DATASET", help = "Edge-list file")]
        dataset: PathBuf,

        #[arg(long, default_value_t = 0, help = "Also list the N highest out-degree nodes")]
        top: usize,
    },
    /// Depth-bounded breadth-first search from a start node
    Bfs {
        #[arg(env = "NEURONET_DATASET", help = "Edge-list file")]
        dataset: PathBuf,

        #[arg(long, help = "Start node id")]
        start: NodeId,

        #[arg(
            long,
            env = "NEURONET_MAX_DEPTH",
            default_value_t = DEFAULT_MAX_DEPTH,
            help = "Maximum number of hops to expand"
        )]
        depth: u32,

        #[arg(long, help = "Write the explored subgraph as JSON to this path")]
        export: Option<PathBuf>,

        #[arg(
            long,
            env = "NEURONET_EXPORT_LIMIT",
            default_value_t = DEFAULT_EXPORT_LIMIT,
            help = "Refuse to export subgraphs with more nodes than this"
        )]
        export_limit: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("neuronet: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let export_limit = match &cli.command {
        Command::Bfs { export_limit, .. } => *export_limit,
        _ => DEFAULT_EXPORT_LIMIT,
    };
    let settings = Settings::new(cli.undirected, cli.format, export_limit)?;

    match cli.command {
        Command::Stats { dataset } => {
            let loaded = session::load(&dataset, &settings.load_options())?;
            StatsReport::new(&loaded).render(settings.format)
        }
        Command::MaxDegree { dataset, top } => {
            let loaded = session::load(&dataset, &settings.load_options())?;
            let graph = &loaded.graph;
            let node_id = graph.node_of_max_out_degree();
            let report = MaxDegreeReport {
                node_id,
                out_degree: node_id.map(|n| graph.out_degree(n)),
                ranking: if top > 0 {
                    degree_ranking(graph, top)
                        .into_iter()
                        .map(RankedNode::from)
                        .collect()
                } else {
                    Vec::new()
                },
            };
            report.render(settings.format)
        }
        Command::Bfs {
            dataset,
            start,
            depth,
            export,
            ..
        } => {
            let loaded = session::load(&dataset, &settings.load_options())?;

            let t = Instant::now();
            let result = loaded.graph.bfs(start, depth)?;
            let elapsed_ms = t.elapsed().as_secs_f64() * 1000.0;

            let mut report = BfsReport::new(start, depth, &result, elapsed_ms);
            if let Some(path) = export {
                report::write_subgraph(&path, start, depth, &result, settings.export_limit)?;
                report.exported_to = Some(path);
            }
            report.render(settings.format)
        }
    }
}
