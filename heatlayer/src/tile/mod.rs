//! Heatmap tile generation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Map layer / CLI / tile server               │
//! │              tile([x, y], zoom) -> encoded image            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   HeatmapTileGenerator                      │
//! │  points stored as zoom-0 global pixels                      │
//! │  scale by 2^zoom -> filter by TileBounds + brush radius     │
//! │  -> translate to tile-local pixels                          │
//! └─────────────────────────────────────────────────────────────┘
//!               │                             │
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │   Projection (Layer)    │   │         Rasterizer          │
//! │   geo <-> global pixels │   │  points -> PNG bytes        │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! [`SharedTileGenerator`] wraps the generator in a read-write lock for
//! hosts rendering tiles from several threads.

mod bounds;
mod error;
mod generator;
mod request;
mod shared;

pub use bounds::{TileBounds, TILE_SIZE};
pub use error::TileGeneratorError;
pub use generator::{HeatmapTileGenerator, REFERENCE_ZOOM};
pub use request::{TileAddress, TileNumber};
pub use shared::SharedTileGenerator;
