//! Graph-subsystem error type.

use thiserror::Error;

use roam_core::NodeId;

/// Errors produced by `roam-graph`.
///
/// Every variant except [`GraphError::NodeNotFound`] is ingestion-fatal:
/// construction aborts and no partial graph is published.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("malformed extract: {0}")]
    Malformed(String),

    #[cfg(feature = "xml")]
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
