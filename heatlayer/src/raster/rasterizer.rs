//! Rasterizer trait for abstracting heatmap rendering.
//!
//! The tile generator decides which points belong to a tile; a `Rasterizer`
//! turns those tile-local points into an encoded image. Keeping the two
//! apart lets callers plug in their own renderer and lets tests observe
//! exactly which points reach the renderer.

use crate::config::HeatmapOptions;
use crate::point::WeightedPoint;
use crate::raster::RasterizerError;

/// Renders tile-local weighted points into an encoded image.
///
/// # Implementors
///
/// - [`CanvasRasterizer`](crate::raster::CanvasRasterizer) - CPU radial brush, PNG output
pub trait Rasterizer: Send + Sync {
    /// Apply rendering options (radius, opacity, gradient, max weight).
    fn configure(&mut self, options: &HeatmapOptions);

    /// Current weight normalization.
    fn max_weight(&self) -> f64;

    /// Set the weight normalization. Values below 1 are raised to 1.
    fn set_max_weight(&mut self, max_weight: f64);

    /// Radius in pixels that a single point paints around itself.
    ///
    /// Points up to this far outside a tile still affect it.
    fn brush_radius(&self) -> f64;

    /// Output size `[width, height]` in pixels.
    fn size(&self) -> [u32; 2];

    /// Render points given in tile-local pixel coordinates.
    ///
    /// An empty slice must yield a blank image, not an error.
    fn generate_image(&self, points: &[WeightedPoint]) -> Result<Vec<u8>, RasterizerError>;

    /// Release any resources. Later `generate_image` calls fail.
    fn destroy(&mut self);
}

impl<T: Rasterizer + ?Sized> Rasterizer for Box<T> {
    fn configure(&mut self, options: &HeatmapOptions) {
        (**self).configure(options)
    }

    fn max_weight(&self) -> f64 {
        (**self).max_weight()
    }

    fn set_max_weight(&mut self, max_weight: f64) {
        (**self).set_max_weight(max_weight)
    }

    fn brush_radius(&self) -> f64 {
        (**self).brush_radius()
    }

    fn size(&self) -> [u32; 2] {
        (**self).size()
    }

    fn generate_image(&self, points: &[WeightedPoint]) -> Result<Vec<u8>, RasterizerError> {
        (**self).generate_image(points)
    }

    fn destroy(&mut self) {
        (**self).destroy()
    }
}
