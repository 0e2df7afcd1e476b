//! Error macros for wgraph

/// Macro for creating input format errors
#[macro_export]
macro_rules! bail_format {
    ($path:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::GraphError::format($path, $line, $reason))
    };
}

/// Macro for rejecting a vertex that the graph does not contain
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains($vertex) {
            return Err($crate::error::GraphError::unknown_vertex($vertex));
        }
    };
}
