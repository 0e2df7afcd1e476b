//! Vertex and edge file reader
//!
//! Both files are whitespace-separated token streams. Line breaks carry no
//! meaning beyond error reporting:
//! - vertex file: every token is a vertex label
//! - edge file: tokens are consumed three at a time as
//!   `source destination weight`, where weight is an integer
//!
//! Negative weights parse here and are rejected by [`Graph::build`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::bail_format;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, GraphMode, Vertex, Weight};

/// Tokens of `text` paired with their 1-based line number
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)))
}

/// Parse vertex labels from in-memory text
pub fn parse_vertices(text: &str) -> Vec<Vertex> {
    tokens(text).map(|(_, label)| Vertex::new(label)).collect()
}

/// Parse `source destination weight` triples from in-memory text
///
/// `origin` names the source of the text in error messages.
pub fn parse_edges(text: &str, origin: &Path) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut stream = tokens(text);
    let mut last_line = 1;

    while let Some((line, source)) = stream.next() {
        last_line = line;
        let Some((line, destination)) = stream.next() else {
            bail_format!(origin, last_line, format!("edge from {source} is missing its destination and weight"));
        };
        last_line = line;
        let Some((line, weight)) = stream.next() else {
            bail_format!(origin, last_line, format!("edge {source} -> {destination} is missing its weight"));
        };
        let weight: Weight = match weight.parse() {
            Ok(w) => w,
            Err(_) => bail_format!(origin, line, format!("expected integer weight, found {weight:?}")),
        };
        edges.push(Edge::new(source, destination, weight));
    }

    Ok(edges)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GraphError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => GraphError::Io(e),
    })
}

/// Read vertex labels from a file
pub fn read_vertices(path: &Path) -> Result<Vec<Vertex>> {
    let vertices = parse_vertices(&read_file(path)?);
    tracing::debug!(path = %path.display(), count = vertices.len(), "read_vertices");
    Ok(vertices)
}

/// Read edge triples from a file
pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    let edges = parse_edges(&read_file(path)?, path)?;
    tracing::debug!(path = %path.display(), count = edges.len(), "read_edges");
    Ok(edges)
}

/// Read both files and build a graph in the given mode
pub fn load_graph(vertex_path: &Path, edge_path: &Path, mode: GraphMode) -> Result<Graph> {
    let vertices = read_vertices(vertex_path)?;
    let edges = read_edges(edge_path)?;
    Graph::build(vertices, edges, mode)
}
