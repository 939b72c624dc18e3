//! Routing-subsystem error type.

use thiserror::Error;

use roam_core::NodeId;
use roam_graph::GraphError;

/// Errors produced by `roam-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The endpoints are not connected by any accepted-road edge sequence.
    /// Expected in normal operation (disjoint components); callers treat it
    /// as "no path", not as a failure.
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
