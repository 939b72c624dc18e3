//! Raster-subsystem error type.
//!
//! Every variant here is recoverable: a bad query box must not take down a
//! serving process, so failures travel in the query's own result type.

use thiserror::Error;

/// Errors produced by `roam-tiles`.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid raster configuration: {0}")]
    Config(String),

    #[error("degenerate query: {0}")]
    Degenerate(String),

    #[error("query box lies entirely outside the root bounding box")]
    OutOfBounds,
}

pub type RasterResult<T> = Result<T, RasterError>;
