//! Weighted graph model and algorithms
//!
//! Provides the immutable adjacency-list [`Graph`] and the algorithms that
//! read it:
//! - Dijkstra shortest path between two vertices
//! - Kruskal minimum spanning forest
//! - Graph provider trait for pluggable adjacency sources

pub mod adjacency;
pub mod algos;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{minimum_spanning_forest, shortest_path};
pub use traversal::GraphProvider;
pub use types::{Edge, GraphMode, Path, SpanningForest, Vertex, Weight};
