//! Command implementations for wgraph

pub mod dispatch;
pub mod mst;
pub mod path;
pub mod show;

use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{Edge, Graph, GraphMode, Vertex};
use wgraph_core::input;

use crate::cli::GraphFiles;

/// Settings resolved from flags and configuration, shared by all commands
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    mode_flag: Option<GraphMode>,
    config: Config,
}

impl Context {
    pub fn new(config: Config, format_flag: Option<OutputFormat>, mode_flag: Option<GraphMode>, quiet: bool) -> Self {
        Self {
            format: config.resolve_format(format_flag),
            quiet,
            mode_flag,
            config,
        }
    }

    /// Construction mode for a command whose own default is `fallback`
    pub fn mode(&self, fallback: GraphMode) -> GraphMode {
        self.config.resolve_mode(self.mode_flag, fallback)
    }

    /// Read the input files and build the graph
    pub fn load_graph(&self, files: &GraphFiles, fallback: GraphMode) -> Result<Graph> {
        input::load_graph(&files.vertices, &files.edges, self.mode(fallback))
    }
}

/// Vertices sorted by label for stable output
pub fn sorted_vertices(graph: &Graph) -> Vec<&Vertex> {
    let mut vertices: Vec<&Vertex> = graph.vertices().collect();
    vertices.sort();
    vertices
}

/// Edges sorted by source, destination, weight for stable output
pub fn sorted_edges(graph: &Graph) -> Vec<&Edge> {
    let mut edges: Vec<&Edge> = graph.edges().iter().collect();
    edges.sort_by(|a, b| {
        a.source
            .cmp(&b.source)
            .then_with(|| a.destination.cmp(&b.destination))
            .then_with(|| a.weight.cmp(&b.weight))
    });
    edges
}

/// Join displayable items as `[a, b, c]`
pub fn bracketed<T: std::fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
