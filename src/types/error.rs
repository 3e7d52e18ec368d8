//! Error types for the dual-graph library.

use thiserror::Error;

/// All errors that can occur in the dual-graph library.
///
/// Labels are carried as their `Display` rendering so the error type does
/// not depend on the label type of the graph that produced it.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal was started from a label that is not in the graph.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// Edge references a label that is not in the graph.
    #[error("Edge references unknown node '{0}'")]
    UnknownNode(String),

    /// The representation does not offer the requested operation.
    #[error("{operation} is not supported by the {representation} representation")]
    Unsupported {
        operation: &'static str,
        representation: &'static str,
    },

    /// Malformed command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Shorthand for a missing traversal start.
    pub fn not_found(label: &impl std::fmt::Display) -> Self {
        Self::NodeNotFound(label.to_string())
    }

    /// Shorthand for a missing edge endpoint.
    pub fn unknown(label: &impl std::fmt::Display) -> Self {
        Self::UnknownNode(label.to_string())
    }

    /// True for the two graph-level lookup failures.
    pub fn is_missing_node(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::UnknownNode(_))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
