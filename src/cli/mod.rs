//! CLI argument parsing for wgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --mode, --config, --quiet, --verbose

pub mod format;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_mode};
pub use wgraph_core::format::OutputFormat;
use wgraph_core::graph::GraphMode;

/// wgraph - shortest paths and minimum spanning trees over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (overrides config)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Graph construction mode: directed or undirected (overrides config)
    #[arg(long, global = true, value_parser = parse_mode)]
    pub mode: Option<GraphMode>,

    /// Configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, wgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input files describing a graph
#[derive(Args, Debug, Clone)]
pub struct GraphFiles {
    /// File of whitespace-separated vertex labels
    pub vertices: PathBuf,

    /// File of whitespace-separated `source destination weight` triples
    pub edges: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two vertices (Dijkstra)
    Path {
        #[command(flatten)]
        files: GraphFiles,

        /// Start vertex
        from: String,

        /// Destination vertex
        to: String,
    },

    /// Compute a minimum spanning forest (Kruskal)
    Mst {
        #[command(flatten)]
        files: GraphFiles,
    },

    /// Print the vertices and adjacency table of a graph
    Show {
        #[command(flatten)]
        files: GraphFiles,
    },
}
