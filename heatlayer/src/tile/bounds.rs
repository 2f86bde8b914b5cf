//! Tile pixel bounds and margin-aware containment.

use crate::tile::TileNumber;

/// Size of a map tile in pixels.
pub const TILE_SIZE: [u32; 2] = [256, 256];

/// Axis-aligned pixel rectangle of one tile in zoom-scaled space.
///
/// `min` is the top-left corner, `max` the bottom-right. Both edges are
/// inclusive for [`contains`](Self::contains).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl TileBounds {
    /// Bounds of `tile` with the standard [`TILE_SIZE`].
    pub fn for_tile(tile: TileNumber) -> Self {
        Self::with_size(tile, TILE_SIZE)
    }

    pub fn with_size(tile: TileNumber, size: [u32; 2]) -> Self {
        let (w, h) = (size[0] as f64, size[1] as f64);
        let min = [tile.x() as f64 * w, tile.y() as f64 * h];
        let max = [min[0] + w, min[1] + h];
        Self { min, max }
    }

    /// Whether `point` lies within these bounds grown by `margin` on every side.
    #[inline]
    pub fn contains(&self, point: [f64; 2], margin: f64) -> bool {
        point[0] >= self.min[0] - margin
            && point[0] <= self.max[0] + margin
            && point[1] >= self.min[1] - margin
            && point[1] <= self.max[1] + margin
    }

    /// Translate a zoom-scaled pixel into coordinates relative to the top-left corner.
    #[inline]
    pub fn to_local(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] - self.min[0], point[1] - self.min[1]]
    }

    /// `[[x0, y0], [x1, y1]]`
    pub fn as_array(&self) -> [[f64; 2]; 2] {
        [self.min, self.max]
    }
}
