//! Path reconstruction from a predecessor map

use crate::graph::types::Vertex;
use std::collections::HashMap;

/// Walk predecessor links back from `to` and return the vertices in
/// `from -> to` order
///
/// Returns `None` when the chain stops before reaching `from`, which means
/// `to` was never reached by the search.
pub fn reconstruct_path(
    from: &Vertex,
    to: &Vertex,
    predecessors: &HashMap<&Vertex, &Vertex>,
) -> Option<Vec<Vertex>> {
    let mut path_nodes = vec![to.clone()];
    let mut current = to;

    while let Some(pred) = predecessors.get(current) {
        path_nodes.push((*pred).clone());
        current = *pred;
    }

    if current != from {
        return None;
    }

    path_nodes.reverse();
    Some(path_nodes)
}
