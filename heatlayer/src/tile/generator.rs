//! Heatmap tile generator.
//!
//! Stores weighted points once, in global pixels at zoom 0, and for every
//! tile request scales them to the requested zoom, keeps those within the
//! tile bounds plus the rasterizer's brush radius, and hands the survivors
//! (in tile-local pixels) to the rasterizer.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::config::HeatmapOptions;
use crate::coord::{Projection, WORLD_SIZE};
use crate::layer::Layer;
use crate::log::{Logger, NoOpLogger};
use crate::point::WeightedPoint;
use crate::raster::{CanvasRasterizer, Rasterizer};
use crate::tile::{TileAddress, TileBounds, TileGeneratorError, TileNumber, TILE_SIZE};
use crate::{log_debug, log_info, log_trace};

/// Zoom at which points are stored.
pub const REFERENCE_ZOOM: u8 = 0;

/// Everything released by `destroy()`.
struct Attached {
    rasterizer: Box<dyn Rasterizer>,
    options: HeatmapOptions,
    layer: Arc<dyn Layer>,
    projection: Arc<dyn Projection>,
    /// Global pixels at [`REFERENCE_ZOOM`], never pre-scaled
    points: Vec<WeightedPoint>,
}

/// Generates heatmap tiles from a set of weighted geographic points.
///
/// # Example
///
/// ```
/// use heatlayer::layer::HeatmapLayer;
/// use heatlayer::point::WeightedPoint;
/// use heatlayer::tile::HeatmapTileGenerator;
/// use std::sync::Arc;
///
/// let points = [
///     WeightedPoint::new([55.75, 37.61], 3.0),
///     WeightedPoint::new([55.76, 37.64], 7.0),
/// ];
/// let generator =
///     HeatmapTileGenerator::new(Arc::new(HeatmapLayer::web_mercator()), Some(&points)).unwrap();
/// assert_eq!(generator.max_weight().unwrap(), 7.0);
///
/// let png = generator.tile([0, 0], 0).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub struct HeatmapTileGenerator {
    state: Option<Attached>,
    logger: Arc<dyn Logger>,
}

impl HeatmapTileGenerator {
    /// Create a generator rendering through a [`CanvasRasterizer`] sized [`TILE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`TileGeneratorError::InvalidPoint`] if any initial point
    /// cannot be projected.
    pub fn new(
        layer: Arc<dyn Layer>,
        points: Option<&[WeightedPoint]>,
    ) -> Result<Self, TileGeneratorError> {
        Self::with_rasterizer(layer, Box::new(CanvasRasterizer::new(TILE_SIZE)), points)
    }

    /// Create a generator rendering through the given rasterizer.
    pub fn with_rasterizer(
        layer: Arc<dyn Layer>,
        mut rasterizer: Box<dyn Rasterizer>,
        points: Option<&[WeightedPoint]>,
    ) -> Result<Self, TileGeneratorError> {
        let options = HeatmapOptions::default();
        rasterizer.configure(&options);

        let projection = layer.projection();
        let mut generator = Self {
            state: Some(Attached {
                rasterizer,
                options,
                layer,
                projection,
                points: Vec::new(),
            }),
            logger: Arc::new(NoOpLogger),
        };

        if let Some(points) = points {
            generator.set_points(points)?;
        }
        Ok(generator)
    }

    /// Replace the diagnostic logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    fn attached(&self) -> Result<&Attached, TileGeneratorError> {
        self.state.as_ref().ok_or(TileGeneratorError::Destroyed)
    }

    fn attached_mut(&mut self) -> Result<&mut Attached, TileGeneratorError> {
        self.state.as_mut().ok_or(TileGeneratorError::Destroyed)
    }

    /// Replace the point set with `points` given as `[lat, lon]`.
    ///
    /// Max weight becomes the largest weight, but never less than 1. If any
    /// point fails to project, nothing changes and the index of the first
    /// bad point is reported.
    pub fn set_points(
        &mut self,
        points: &[WeightedPoint],
    ) -> Result<&mut Self, TileGeneratorError> {
        let logger = Arc::clone(&self.logger);
        let attached = self.attached_mut()?;

        let mut projected = Vec::with_capacity(points.len());
        let mut max_weight = 1.0_f64;
        for (index, point) in points.iter().enumerate() {
            let pixels = attached
                .projection
                .to_global_pixels(point.coordinates, REFERENCE_ZOOM)
                .map_err(|source| TileGeneratorError::InvalidPoint { index, source })?;
            projected.push(point.with_coordinates(pixels));
            max_weight = max_weight.max(point.weight);
        }

        attached.points = projected;
        attached.options.set_max_weight(max_weight);
        attached.rasterizer.set_max_weight(max_weight);

        log_info!(
            logger,
            "Loaded {} heatmap points (max weight {})",
            attached.points.len(),
            max_weight
        );
        Ok(self)
    }

    /// The stored points converted back to `[lat, lon]`.
    ///
    /// Returns a fresh vector; the stored point set is left untouched.
    pub fn points(&self) -> Result<Vec<WeightedPoint>, TileGeneratorError> {
        let attached = self.attached()?;
        attached
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                attached
                    .projection
                    .from_global_pixels(point.coordinates, REFERENCE_ZOOM)
                    .map(|geo| point.with_coordinates(geo))
                    .map_err(|source| TileGeneratorError::InvalidPoint { index, source })
            })
            .collect()
    }

    /// Number of stored points.
    pub fn point_count(&self) -> Result<usize, TileGeneratorError> {
        Ok(self.attached()?.points.len())
    }

    /// Weight normalization forwarded to the rasterizer (at least 1).
    pub fn max_weight(&self) -> Result<f64, TileGeneratorError> {
        Ok(self.attached()?.options.max_weight())
    }

    /// Current rendering options.
    pub fn options(&self) -> Result<&HeatmapOptions, TileGeneratorError> {
        Ok(&self.attached()?.options)
    }

    /// Replace the rendering options and reconfigure the rasterizer.
    ///
    /// The max weight computed from the current points is kept.
    pub fn set_options(
        &mut self,
        options: HeatmapOptions,
    ) -> Result<&mut Self, TileGeneratorError> {
        let attached = self.attached_mut()?;
        let options = options.with_max_weight(attached.options.max_weight());
        attached.rasterizer.configure(&options);
        attached.options = options;
        Ok(self)
    }

    /// The layer this generator renders for.
    pub fn layer(&self) -> Result<Arc<dyn Layer>, TileGeneratorError> {
        Ok(Arc::clone(&self.attached()?.layer))
    }

    /// Points affecting `tile` at `zoom`, in tile-local pixels.
    ///
    /// A point is kept when, scaled by `2^zoom`, it lies inside the tile
    /// bounds grown by the brush radius (edges inclusive). Tiles are as large
    /// as the rasterizer's output.
    pub fn visible_points(
        &self,
        tile: impl Into<TileNumber>,
        zoom: u8,
    ) -> Result<Vec<WeightedPoint>, TileGeneratorError> {
        let attached = self.attached()?;
        let tile = tile.into();
        let bounds = TileBounds::with_size(tile, attached.rasterizer.size());
        let zoom_factor = zoom_factor(zoom);
        let margin = attached.rasterizer.brush_radius();

        let visible: Vec<WeightedPoint> = attached
            .points
            .iter()
            .filter_map(|point| {
                let scaled = [
                    zoom_factor * point.coordinates[0],
                    zoom_factor * point.coordinates[1],
                ];
                bounds
                    .contains(scaled, margin)
                    .then(|| point.with_coordinates(bounds.to_local(scaled)))
            })
            .collect();

        log_trace!(
            self.logger,
            "Tile {}: {} of {} points within margin {}",
            TileAddress::new(tile, zoom),
            visible.len(),
            attached.points.len(),
            margin
        );
        Ok(visible)
    }

    /// Render `tile` at `zoom`; returns whatever the rasterizer encodes.
    pub fn tile(
        &self,
        tile: impl Into<TileNumber>,
        zoom: u8,
    ) -> Result<Vec<u8>, TileGeneratorError> {
        let tile = tile.into();
        let points = self.visible_points(tile, zoom)?;
        let image = self.attached()?.rasterizer.generate_image(&points)?;

        log_debug!(
            self.logger,
            "Rendered tile {} from {} points ({} bytes)",
            TileAddress::new(tile, zoom),
            points.len(),
            image.len()
        );
        Ok(image)
    }

    /// Tiles inside the world grid at `zoom` that at least one point affects.
    ///
    /// Sorted by column, then row.
    pub fn covered_tiles(&self, zoom: u8) -> Result<Vec<TileNumber>, TileGeneratorError> {
        let attached = self.attached()?;
        let zoom_factor = zoom_factor(zoom);
        let margin = attached.rasterizer.brush_radius();
        let size = attached.rasterizer.size();
        let [w, h] = [size[0] as f64, size[1] as f64];
        let world = WORLD_SIZE * zoom_factor;
        let last = [(world / w).ceil() as i64 - 1, (world / h).ceil() as i64 - 1];

        let mut tiles = BTreeSet::new();
        for point in &attached.points {
            let px = zoom_factor * point.coordinates[0];
            let py = zoom_factor * point.coordinates[1];
            if !(px.is_finite() && py.is_finite()) {
                continue;
            }

            // t * size - margin <= p <= (t + 1) * size + margin
            let far = TileNumber::containing([px + margin, py + margin], size);
            let x_min = ((px - margin) / w - 1.0).ceil().max(0.0) as i64;
            let y_min = ((py - margin) / h - 1.0).ceil().max(0.0) as i64;
            let x_max = far.x().min(last[0]);
            let y_max = far.y().min(last[1]);

            for x in x_min..=x_max {
                for y in y_min..=y_max {
                    tiles.insert(TileNumber::new(x, y));
                }
            }
        }
        Ok(tiles.into_iter().collect())
    }

    /// Release the rasterizer, projection, layer and points.
    ///
    /// Every later call, including a second `destroy`, returns
    /// [`TileGeneratorError::Destroyed`].
    pub fn destroy(&mut self) -> Result<(), TileGeneratorError> {
        let mut attached = self.state.take().ok_or(TileGeneratorError::Destroyed)?;
        attached.rasterizer.destroy();
        log_debug!(
            self.logger,
            "Tile generator destroyed ({} points released)",
            attached.points.len()
        );
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.is_none()
    }
}

impl fmt::Debug for HeatmapTileGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(attached) => f
                .debug_struct("HeatmapTileGenerator")
                .field("points", &attached.points.len())
                .field("options", &attached.options)
                .finish_non_exhaustive(),
            None => f.write_str("HeatmapTileGenerator(destroyed)"),
        }
    }
}

#[inline]
fn zoom_factor(zoom: u8) -> f64 {
    2.0_f64.powi(zoom as i32)
}
