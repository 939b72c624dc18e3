//! Engine-facade error type.

use thiserror::Error;

use roam_graph::GraphError;
use roam_tiles::RasterError;

/// Errors surfaced by the engine facade.
///
/// Construction-time failures ([`EngineError::Graph`] during ingestion) are
/// fatal to startup: no partial engine is published.  Query-time failures
/// ([`EngineError::EmptyGraph`], [`EngineError::Raster`]) are scoped to the
/// one query that produced them; a long-lived service keeps serving.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A nearest or routing query against a graph with no routable nodes.
    #[error("the road graph has no routable nodes")]
    EmptyGraph,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

pub type EngineResult<T> = Result<T, EngineError>;
