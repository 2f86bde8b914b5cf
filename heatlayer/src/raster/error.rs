//! Rasterizer error types.

use thiserror::Error;

/// Errors that can occur while producing a heatmap image.
#[derive(Debug, Error)]
pub enum RasterizerError {
    /// A point handed to the rasterizer has non-finite data.
    #[error("Invalid point at index {index}: coordinates and weight must be finite")]
    InvalidPoint { index: usize },

    /// PNG encoding failed.
    #[error("Image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),

    /// The rasterizer has been destroyed.
    #[error("Rasterizer has been destroyed")]
    Destroyed,
}
