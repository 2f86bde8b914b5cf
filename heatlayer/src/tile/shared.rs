//! Thread-safe handle around a [`HeatmapTileGenerator`].
//!
//! The generator itself has no internal locking. Hosts that serve tile
//! requests from several threads share it through this handle instead:
//! tile rendering takes a read lock, so tiles render concurrently, while
//! replacing points or options takes the write lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::config::HeatmapOptions;
use crate::point::WeightedPoint;
use crate::tile::{HeatmapTileGenerator, TileGeneratorError, TileNumber};

/// Cloneable, `Send + Sync` handle to a shared tile generator.
///
/// # Example
///
/// ```
/// use heatlayer::layer::HeatmapLayer;
/// use heatlayer::point::WeightedPoint;
/// use heatlayer::tile::{HeatmapTileGenerator, SharedTileGenerator};
/// use std::sync::Arc;
///
/// let generator = HeatmapTileGenerator::new(Arc::new(HeatmapLayer::web_mercator()), None).unwrap();
/// let shared = SharedTileGenerator::new(generator);
///
/// let worker = shared.clone();
/// std::thread::spawn(move || worker.tile([0, 0], 0).unwrap())
///     .join()
///     .unwrap();
///
/// shared.set_points(&[WeightedPoint::new([0.0, 0.0], 2.0)]).unwrap();
/// assert_eq!(shared.read().max_weight().unwrap(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SharedTileGenerator {
    inner: Arc<RwLock<HeatmapTileGenerator>>,
}

impl SharedTileGenerator {
    pub fn new(generator: HeatmapTileGenerator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(generator)),
        }
    }

    /// Render a tile under a read lock.
    pub fn tile(
        &self,
        tile: impl Into<TileNumber>,
        zoom: u8,
    ) -> Result<Vec<u8>, TileGeneratorError> {
        self.inner.read().tile(tile, zoom)
    }

    /// Filtered tile-local points under a read lock.
    pub fn visible_points(
        &self,
        tile: impl Into<TileNumber>,
        zoom: u8,
    ) -> Result<Vec<WeightedPoint>, TileGeneratorError> {
        self.inner.read().visible_points(tile, zoom)
    }

    pub fn covered_tiles(&self, zoom: u8) -> Result<Vec<TileNumber>, TileGeneratorError> {
        self.inner.read().covered_tiles(zoom)
    }

    pub fn points(&self) -> Result<Vec<WeightedPoint>, TileGeneratorError> {
        self.inner.read().points()
    }

    /// Replace the point set under the write lock.
    pub fn set_points(&self, points: &[WeightedPoint]) -> Result<(), TileGeneratorError> {
        self.inner.write().set_points(points).map(|_| ())
    }

    /// Replace the rendering options under the write lock.
    pub fn set_options(&self, options: HeatmapOptions) -> Result<(), TileGeneratorError> {
        self.inner.write().set_options(options).map(|_| ())
    }

    pub fn destroy(&self) -> Result<(), TileGeneratorError> {
        self.inner.write().destroy()
    }

    /// Borrow the generator for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, HeatmapTileGenerator> {
        self.inner.read()
    }
}

impl From<HeatmapTileGenerator> for SharedTileGenerator {
    fn from(generator: HeatmapTileGenerator) -> Self {
        Self::new(generator)
    }
}
