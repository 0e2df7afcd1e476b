//! wgraph Core Library
//!
//! Weighted graph model with Dijkstra shortest paths and Kruskal minimum
//! spanning forests, plus the file reader, configuration and logging setup
//! shared with the `wgraph` command-line tool.
//!
//! ```rust
//! use wgraph_core::graph::{minimum_spanning_forest, shortest_path, Graph, GraphMode, Vertex};
//!
//! let graph = Graph::from_labels(
//!     ["A", "B", "C"],
//!     [("A", "B", 1), ("B", "C", 2), ("A", "C", 5)],
//!     GraphMode::Undirected,
//! )?;
//!
//! let path = shortest_path(&graph, &Vertex::new("A"), &Vertex::new("C"))?
//!     .expect("C is reachable");
//! assert_eq!(path.cost, 3);
//!
//! let forest = minimum_spanning_forest(&graph)?;
//! assert_eq!(forest.total_weight, 3);
//! # Ok::<(), wgraph_core::error::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
