use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge weight. Signed so that negative input survives parsing and can be
/// rejected by graph construction with a proper error.
pub type Weight = i64;

/// A labeled graph node. Equality, hashing and ordering are by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex(label)
    }
}

/// A weighted `source -> destination` record
///
/// Whether the record is read as directed or undirected is decided by the
/// [`GraphMode`] of the graph it is handed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: impl Into<Vertex>, destination: impl Into<Vertex>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.destination, self.weight)
    }
}

/// How construction folds edges into the adjacency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// Every edge is stored as `source -> destination`
    #[default]
    Directed,
    /// Each unordered pair is stored once, in the orientation first seen
    Undirected,
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphMode::Directed => write!(f, "directed"),
            GraphMode::Undirected => write!(f, "undirected"),
        }
    }
}

impl FromStr for GraphMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(GraphMode::Directed),
            "undirected" => Ok(GraphMode::Undirected),
            other => Err(GraphError::UsageError(format!(
                "unknown graph mode: {other} (expected: directed or undirected)"
            ))),
        }
    }
}

/// Result of a shortest-path query: vertices from source to destination
/// inclusive, and the total weight along them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub cost: Weight,
}

impl Path {
    /// The zero-cost path from a vertex to itself
    pub fn trivial(vertex: Vertex) -> Self {
        Self {
            vertices: vec![vertex],
            cost: 0,
        }
    }

    pub fn source(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn destination(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.vertices.iter().map(Vertex::label).collect();
        write!(f, "{}", labels.join(" -> "))
    }
}

/// Result of Kruskal's algorithm
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SpanningForest {
    /// Accepted edges, in acceptance order (ascending weight)
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    /// Number of trees, counting isolated vertices as their own tree
    pub components: usize,
}

impl SpanningForest {
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}
