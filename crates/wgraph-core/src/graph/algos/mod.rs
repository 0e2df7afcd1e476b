//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Weighted shortest path finding
//! - `kruskal`: Minimum spanning forest
//! - `union_find`: Disjoint-set used by `kruskal`
//! - `path`: Predecessor-chain reconstruction

pub mod dijkstra;
pub mod kruskal;
pub mod path;
pub mod union_find;

pub use dijkstra::shortest_path;
pub use kruskal::minimum_spanning_forest;
pub use union_find::DisjointSet;
