//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing input file, unreadable config)
//! - 3: Data error (malformed input, invalid graph, unknown vertex)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{Edge, Vertex, Weight};

/// Exit codes for the wgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad input, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph validation (exit code 3)
    #[error("edge weight cannot be negative: {edge}")]
    InvalidWeight { edge: Edge },

    #[error("vertex {label} is not in the graph")]
    UnknownVertex { label: String },

    #[error("conflicting edges between {from} and {to}: weight {existing} already stored, got {conflicting}")]
    ConflictingEdge {
        from: Vertex,
        to: Vertex,
        existing: Weight,
        conflicting: Weight,
    },

    #[error("{context} exceeds the largest representable weight")]
    WeightOverflow { context: String },

    // Input files (exit code 3)
    #[error("format error in {path:?} at line {line}: {reason}")]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Usage errors (exit code 2)
    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a vertex missing from the graph
    pub fn unknown_vertex(vertex: &Vertex) -> Self {
        GraphError::UnknownVertex {
            label: vertex.label().to_string(),
        }
    }

    /// Create an error for a malformed input file
    pub fn format(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        GraphError::Format {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a summed weight that does not fit in [`Weight`]
    pub fn weight_overflow(context: impl Into<String>) -> Self {
        GraphError::WeightOverflow {
            context: context.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidWeight { .. }
            | GraphError::UnknownVertex { .. }
            | GraphError::ConflictingEdge { .. }
            | GraphError::WeightOverflow { .. }
            | GraphError::Format { .. } => ExitCode::Data,

            GraphError::FileNotFound { .. }
            | GraphError::InvalidConfig { .. }
            | GraphError::UnknownFormat(_)
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::Io(_) | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::ConflictingEdge { .. } => "conflicting_edge",
            GraphError::WeightOverflow { .. } => "weight_overflow",
            GraphError::FileNotFound { .. } => "file_not_found",
            GraphError::Format { .. } => "format_error",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
