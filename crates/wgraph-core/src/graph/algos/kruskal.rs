use crate::error::{GraphError, Result};
use crate::graph::algos::union_find::DisjointSet;
use crate::graph::types::{Edge, GraphMode, SpanningForest, Vertex, Weight};
use crate::graph::Graph;
use crate::trace_elapsed;
use std::collections::HashMap;
use std::time::Instant;

/// Build a minimum spanning forest with Kruskal's algorithm
///
/// Edges are taken in ascending weight order (ties by source label, then
/// destination label) and accepted whenever their endpoints are still in
/// different components. Edge direction is ignored. A disconnected graph
/// yields one tree per component; isolated vertices count as components of
/// their own but have no incident edges in the result.
///
/// Fails with [`GraphError::WeightOverflow`] when the accepted weights sum
/// past [`Weight::MAX`].
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_forest(graph: &Graph) -> Result<SpanningForest> {
    if graph.mode() == GraphMode::Directed {
        tracing::warn!("spanning forest over a directed graph treats every edge as undirected");
    }

    let start = Instant::now();
    let index: HashMap<&Vertex, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, vertex)| (vertex, i))
        .collect();

    let mut candidates: Vec<&Edge> = graph.edges().iter().collect();
    candidates.sort_by(|a, b| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.destination.cmp(&b.destination))
    });

    let mut components = DisjointSet::new(index.len());
    let mut accepted = Vec::with_capacity(index.len().saturating_sub(1));
    let mut total_weight: Weight = 0;

    for edge in candidates {
        if edge.is_self_loop() {
            continue;
        }
        // Construction guarantees both endpoints are indexed
        let (Some(&a), Some(&b)) = (index.get(&edge.source), index.get(&edge.destination)) else {
            continue;
        };
        if components.union(a, b) {
            total_weight = total_weight
                .checked_add(edge.weight)
                .ok_or_else(|| GraphError::weight_overflow("spanning forest weight"))?;
            accepted.push(edge.clone());
            if components.set_count() == 1 {
                break;
            }
        }
    }

    trace_elapsed!(start, "kruskal", accepted = accepted.len());
    tracing::debug!(
        accepted = accepted.len(),
        total_weight,
        components = components.set_count(),
        "spanning_forest"
    );

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
        components: components.set_count(),
    })
}
