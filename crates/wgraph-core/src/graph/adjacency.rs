use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, GraphMode, Vertex, Weight};
use std::collections::{HashMap, HashSet};

/// Immutable weighted graph backed by an adjacency table
///
/// The table maps every vertex to its stored outgoing neighbors and their
/// weights. The accepted edge records are kept alongside it so `edges()` is
/// a borrow rather than a rebuild. Both are fixed once [`Graph::build`]
/// returns.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,
    adjacency: HashMap<Vertex, HashMap<Vertex, Weight>>,
    edges: HashSet<Edge>,
}

/// Outcome of offering one edge to the table
enum Insertion {
    Added,
    Duplicate,
}

impl Graph {
    /// Build a graph from vertex and edge collections
    ///
    /// Edges are validated in input order. The first invalid edge aborts
    /// construction:
    /// - negative weight: [`GraphError::InvalidWeight`]
    /// - endpoint not among `vertices`: [`GraphError::UnknownVertex`]
    /// - pair already stored with a different weight:
    ///   [`GraphError::ConflictingEdge`]
    ///
    /// A pair already stored with the same weight is dropped silently. In
    /// [`GraphMode::Undirected`] the reversed pair counts as the same pair.
    #[tracing::instrument(skip_all, fields(mode = %mode))]
    pub fn build(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
        mode: GraphMode,
    ) -> Result<Self> {
        let mut graph = Graph {
            mode,
            adjacency: vertices
                .into_iter()
                .map(|vertex| (vertex, HashMap::new()))
                .collect(),
            edges: HashSet::new(),
        };

        let mut offered = 0usize;
        let mut duplicates = 0usize;
        for edge in edges {
            offered += 1;
            graph.validate(&edge)?;
            match graph.insert(edge)? {
                Insertion::Added => {}
                Insertion::Duplicate => duplicates += 1,
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            offered,
            duplicates,
            "build_graph"
        );

        Ok(graph)
    }

    /// Build a graph from raw labels and `(source, destination, weight)` triples
    pub fn from_labels<L, S>(
        labels: impl IntoIterator<Item = L>,
        triples: impl IntoIterator<Item = (S, S, Weight)>,
        mode: GraphMode,
    ) -> Result<Self>
    where
        L: Into<Vertex>,
        S: Into<Vertex>,
    {
        Self::build(
            labels.into_iter().map(Into::into),
            triples
                .into_iter()
                .map(|(source, destination, weight)| Edge::new(source, destination, weight)),
            mode,
        )
    }

    fn validate(&self, edge: &Edge) -> Result<()> {
        if edge.weight < 0 {
            return Err(GraphError::InvalidWeight { edge: edge.clone() });
        }
        ensure_vertex!(self, &edge.source);
        ensure_vertex!(self, &edge.destination);
        Ok(())
    }

    fn insert(&mut self, edge: Edge) -> Result<Insertion> {
        if let Some(existing) = self.stored_weight(&edge.source, &edge.destination) {
            return check_duplicate(&edge, &edge.source, &edge.destination, existing);
        }
        if self.mode == GraphMode::Undirected {
            if let Some(existing) = self.stored_weight(&edge.destination, &edge.source) {
                return check_duplicate(&edge, &edge.destination, &edge.source, existing);
            }
        }

        self.adjacency
            .get_mut(&edge.source)
            .ok_or_else(|| GraphError::unknown_vertex(&edge.source))?
            .insert(edge.destination.clone(), edge.weight);
        self.edges.insert(edge);
        Ok(Insertion::Added)
    }

    fn stored_weight(&self, from: &Vertex, to: &Vertex) -> Option<Weight> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .copied()
    }

    /// The construction mode this graph was built with
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// All vertices, in no particular order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All accepted edge records
    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices `w` such that `vertex -> w` is stored
    ///
    /// Empty when the vertex has no outgoing edge; an error only when the
    /// vertex is not in the graph.
    pub fn adjacent<'a>(&'a self, vertex: &Vertex) -> Result<impl Iterator<Item = &'a Vertex> + 'a> {
        Ok(self.neighbors(vertex)?.map(|(neighbor, _)| neighbor))
    }

    /// Stored outgoing edges of `vertex` as `(neighbor, weight)` pairs
    pub fn neighbors<'a>(
        &'a self,
        vertex: &Vertex,
    ) -> Result<impl Iterator<Item = (&'a Vertex, Weight)> + 'a> {
        let neighbors = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))?;
        Ok(neighbors.iter().map(|(neighbor, weight)| (neighbor, *weight)))
    }

    /// Weight of the stored edge `from -> to`
    ///
    /// `Ok(None)` means both vertices exist but no such edge is stored.
    pub fn cost(&self, from: &Vertex, to: &Vertex) -> Result<Option<Weight>> {
        ensure_vertex!(self, from);
        ensure_vertex!(self, to);
        Ok(self.stored_weight(from, to))
    }
}

fn check_duplicate(edge: &Edge, from: &Vertex, to: &Vertex, existing: Weight) -> Result<Insertion> {
    if existing == edge.weight {
        tracing::trace!(edge = %edge, "duplicate_edge");
        Ok(Insertion::Duplicate)
    } else {
        Err(GraphError::ConflictingEdge {
            from: from.clone(),
            to: to.clone(),
            existing,
            conflicting: edge.weight,
        })
    }
}
