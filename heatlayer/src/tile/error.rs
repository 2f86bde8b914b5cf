//! Error types for tile generation.
//!
//! Wraps coordinate conversion failures (bad input points) and rasterizer
//! failures, and adds the use-after-destroy case.

use thiserror::Error;

use crate::coord::CoordError;
use crate::raster::RasterizerError;

/// Errors that can occur during tile generation.
#[derive(Debug, Error)]
pub enum TileGeneratorError {
    /// A supplied point could not be projected; the whole call was rejected.
    #[error("Invalid point at index {index}: {source}")]
    InvalidPoint { index: usize, source: CoordError },

    /// The generator was used after `destroy()`.
    #[error("Tile generator has been destroyed")]
    Destroyed,

    /// The rasterizer failed to produce an image.
    #[error("Rasterizer failed: {0}")]
    Rasterizer(#[from] RasterizerError),
}
