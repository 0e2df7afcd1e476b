use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Path, Vertex, Weight};
use crate::graph::GraphProvider;
use crate::trace_elapsed;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

/// Tentative path cost during a search
///
/// Wider than [`Weight`] so that sums of non-negative weights along any
/// simple path cannot overflow; only the final cost has to fit in a
/// [`Weight`].
pub type Distance = i128;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
///
/// Equal distances fall back to label order so a run is repeatable. Only
/// the distance matters for correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<'a> {
    pub vertex: &'a Vertex,
    pub distance: Distance,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(other.vertex))
    }
}

/// State tracked during one Dijkstra search
///
/// A vertex without a `distance` entry has not been reached yet.
struct DijkstraState<'a> {
    distance: HashMap<&'a Vertex, Distance>,
    predecessor: HashMap<&'a Vertex, &'a Vertex>,
    visited: HashSet<&'a Vertex>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
}

impl<'a> DijkstraState<'a> {
    fn new(capacity: usize) -> Self {
        Self {
            distance: HashMap::with_capacity(capacity),
            predecessor: HashMap::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
            heap: BinaryHeap::new(),
        }
    }

    fn seed(&mut self, source: &'a Vertex) {
        self.distance.insert(source, 0);
        self.heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: 0,
        }));
    }

    fn distance_to(&self, vertex: &Vertex) -> Option<Distance> {
        self.distance.get(vertex).copied()
    }

    fn relax(&mut self, from: &'a Vertex, to: &'a Vertex, weight: Weight) {
        let Some(base) = self.distance_to(from) else {
            return;
        };
        let candidate = base + Distance::from(weight);
        if self.distance_to(to).is_some_and(|known| known <= candidate) {
            return;
        }
        self.distance.insert(to, candidate);
        self.predecessor.insert(to, from);
        // Older entries for `to` stay queued and are skipped when popped
        self.heap.push(Reverse(HeapEntry {
            vertex: to,
            distance: candidate,
        }));
    }
}

/// Find the cheapest path from `from` to `to`
///
/// Returns `Ok(None)` when `to` is unreachable. Fails with
/// [`GraphError::UnknownVertex`](crate::error::GraphError::UnknownVertex)
/// if either endpoint is missing. Edge weights are assumed non-negative,
/// which graph construction guarantees. A reachable `to` whose cheapest
/// cost does not fit in a [`Weight`] fails with
/// [`GraphError::WeightOverflow`].
///
/// The search stops as soon as `to` is popped, so vertices farther away
/// than `to` are never settled. When several paths share the minimal cost
/// any of them may be returned.
#[tracing::instrument(skip_all, fields(from = %from, to = %to))]
pub fn shortest_path<'a>(
    graph: &'a dyn GraphProvider,
    from: &'a Vertex,
    to: &'a Vertex,
) -> Result<Option<Path>> {
    ensure_vertex!(graph, from);
    ensure_vertex!(graph, to);

    let start = Instant::now();
    let mut state = DijkstraState::new(graph.vertex_count());
    state.seed(from);

    // Main Dijkstra loop
    while let Some(Reverse(HeapEntry {
        vertex: current, ..
    })) = state.heap.pop()
    {
        if current == to {
            break;
        }

        if !state.visited.insert(current) {
            continue;
        }

        for (neighbor, weight) in graph.get_outbound_edges(current) {
            state.relax(current, neighbor, weight);
        }
    }

    trace_elapsed!(start, "dijkstra_search", settled = state.visited.len());

    let Some(vertices) = reconstruct_path(from, to, &state.predecessor) else {
        tracing::debug!(settled = state.visited.len(), "no_path");
        return Ok(None);
    };

    let cost = state
        .distance_to(to)
        .and_then(|distance| Weight::try_from(distance).ok())
        .ok_or_else(|| GraphError::weight_overflow(format!("cost of the path from {from} to {to}")))?;
    tracing::debug!(hops = vertices.len() - 1, cost, "path_found");
    Ok(Some(Path { vertices, cost }))
}
