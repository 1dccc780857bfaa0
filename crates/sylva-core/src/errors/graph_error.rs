//! Graph engine errors.

use super::error_code::{self, SylvaErrorCode};
use crate::models::NodeId;

/// Errors raised by traversal, filtering, and cloning.
///
/// Absence is not an error here: a traversal with no match or a filter
/// with no surviving root returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A starting node or template id is not present in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A builder tried to insert an id that already exists.
    #[error("node already exists: {0}")]
    DuplicateNode(NodeId),

    /// An internal invariant did not hold.
    #[error("graph inconsistency: {details}")]
    Inconsistent { details: String },

    /// The caller's cancellation token fired mid-operation.
    #[error("operation cancelled")]
    Cancelled,
}

impl GraphError {
    pub fn inconsistent(details: impl Into<String>) -> Self {
        Self::Inconsistent {
            details: details.into(),
        }
    }
}

impl SylvaErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound(_) => error_code::NODE_NOT_FOUND,
            Self::DuplicateNode(_) => error_code::DUPLICATE_NODE,
            Self::Inconsistent { .. } => error_code::GRAPH_INCONSISTENT,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
