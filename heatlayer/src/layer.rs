//! Map layer abstraction.
//!
//! A heatmap tile generator only needs one thing from the layer it renders
//! for: the projection. Everything else the layer does (options, events,
//! tile requests) stays on the map side.

use std::fmt;
use std::sync::Arc;

use crate::coord::{Projection, WebMercatorProjection};

/// Layer-like object exposing a projection option.
pub trait Layer: Send + Sync {
    /// Projection used to place points on this layer.
    fn projection(&self) -> Arc<dyn Projection>;
}

/// Minimal layer holding a projection.
///
/// # Example
///
/// ```
/// use heatlayer::layer::{HeatmapLayer, Layer};
/// use heatlayer::coord::Projection;
///
/// let layer = HeatmapLayer::web_mercator();
/// let px = layer.projection().to_global_pixels([0.0, 0.0], 0).unwrap();
/// assert_eq!(px, [128.0, 128.0]);
/// ```
#[derive(Clone)]
pub struct HeatmapLayer {
    projection: Arc<dyn Projection>,
}

impl HeatmapLayer {
    pub fn new(projection: Arc<dyn Projection>) -> Self {
        Self { projection }
    }

    /// Layer using the spherical Web Mercator projection.
    pub fn web_mercator() -> Self {
        Self::new(Arc::new(WebMercatorProjection))
    }
}

impl Default for HeatmapLayer {
    fn default() -> Self {
        Self::web_mercator()
    }
}

impl fmt::Debug for HeatmapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeatmapLayer").finish_non_exhaustive()
    }
}

impl Layer for HeatmapLayer {
    fn projection(&self) -> Arc<dyn Projection> {
        Arc::clone(&self.projection)
    }
}
