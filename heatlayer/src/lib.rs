//! heatlayer - Heatmap tiles for slippy maps
//!
//! Turns a set of weighted geographic points into heatmap tiles addressed
//! by `[x, y]` tile number and zoom level. Points are projected once into
//! zoom-0 global pixels; each tile request scales them, keeps those near the
//! tile, and hands them to a rasterizer.
//!
//! # Example
//!
//! ```
//! use heatlayer::layer::HeatmapLayer;
//! use heatlayer::point::WeightedPoint;
//! use heatlayer::tile::HeatmapTileGenerator;
//! use std::sync::Arc;
//!
//! let layer = Arc::new(HeatmapLayer::web_mercator());
//! let mut generator = HeatmapTileGenerator::new(layer, None)?;
//! generator.set_points(&[WeightedPoint::new([55.7558, 37.6173], 4.0)])?;
//!
//! for tile in generator.covered_tiles(3)? {
//!     let png = generator.tile(tile, 3)?;
//!     assert!(!png.is_empty());
//! }
//! # Ok::<(), heatlayer::tile::TileGeneratorError>(())
//! ```

pub mod config;
pub mod coord;
pub mod layer;
pub mod log;
pub mod logging;
pub mod point;
pub mod raster;
pub mod tile;

/// Version of the heatlayer library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
