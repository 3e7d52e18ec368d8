//! CLI entry point for the `dgraph` command-line tool.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use dual_graph::cli::{commands, Order, Representation, RunOptions};
use dual_graph::graph::DfsMode;
use dual_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "dgraph",
    about = "dual-graph CLI — adjacency list vs adjacency matrix traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference ring A -> B -> ... -> F -> A on both representations
    Demo,
    /// Build a graph from arguments and traverse it
    Run {
        /// Representation: list or matrix
        #[arg(long, default_value = "list")]
        repr: String,
        /// Comma-separated node labels, added in order
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,
        /// Edge spec, repeatable: FROM>TO (directed) or A=B (undirected, list only)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Start node for traversal
        #[arg(long)]
        start: Option<String>,
        /// Traversal: bfs, dfs, or both
        #[arg(long, default_value = "both")]
        order: String,
        /// DFS formulation: iterative or recursive
        #[arg(long, default_value = "iterative")]
        dfs_mode: String,
        /// Print the graph structure
        #[arg(long)]
        print: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(&mut out, json),
        Commands::Run {
            repr,
            nodes,
            edges,
            start,
            order,
            dfs_mode,
            print,
        } => {
            let representation = match Representation::from_name(&repr) {
                Some(r) => r,
                None => {
                    eprintln!("Invalid representation: {}", repr);
                    process::exit(3);
                }
            };
            let orders = match Order::parse_many(&order) {
                Some(o) => o,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            let dfs_mode = match DfsMode::from_name(&dfs_mode) {
                Some(m) => m,
                None => {
                    eprintln!("Invalid DFS mode: {}", dfs_mode);
                    process::exit(3);
                }
            };
            let opts = RunOptions {
                representation,
                nodes,
                edges,
                start,
                orders,
                dfs_mode,
                print,
            };
            commands::cmd_run(&mut out, &opts, json)
        }
    };

    let _ = out.flush();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidArgument(_) | GraphError::Unsupported { .. } => 3,
            GraphError::NodeNotFound(_) | GraphError::UnknownNode(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
