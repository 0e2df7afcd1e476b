use crate::graph::adjacency::Graph;
use crate::graph::types::{Vertex, Weight};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn contains(&self, vertex: &Vertex) -> bool;
    fn vertex_count(&self) -> usize;
    fn get_outbound_edges(&self, vertex: &Vertex) -> Vec<(&Vertex, Weight)>;
}

impl GraphProvider for Graph {
    fn contains(&self, vertex: &Vertex) -> bool {
        Graph::contains(self, vertex)
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn get_outbound_edges(&self, vertex: &Vertex) -> Vec<(&Vertex, Weight)> {
        self.neighbors(vertex)
            .map(|neighbors| neighbors.collect())
            .unwrap_or_default()
    }
}
