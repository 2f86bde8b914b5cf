//! Heatmap rasterization.
//!
//! The [`Rasterizer`] trait is the seam between point selection (done by
//! the tile generator) and image production. [`CanvasRasterizer`] is the
//! built-in implementation: a radial brush over an intensity buffer,
//! colourized through a gradient and encoded as PNG.

mod canvas;
mod error;
mod palette;
mod rasterizer;

pub use canvas::CanvasRasterizer;
pub use error::RasterizerError;
pub use palette::{Palette, PALETTE_SIZE};
pub use rasterizer::Rasterizer;
