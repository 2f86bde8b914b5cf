//! Tile addressing types.
//!
//! Provides [`TileNumber`] (the `[x, y]` position of a tile in the quad-tile
//! grid) and [`TileAddress`] (a tile number plus its zoom level), the two
//! ways callers name the tile they want rendered.

use std::fmt;

/// Position of a tile in the quad-tile grid at some zoom.
///
/// `x` grows eastwards, `y` grows southwards; `[0, 0]` is the north-west
/// tile. Values are signed so that tiles left of or above the world can be
/// addressed without wrapping.
///
/// # Example
///
/// ```
/// use heatlayer::tile::TileNumber;
///
/// let tile = TileNumber::new(3, 5);
/// assert_eq!(tile, TileNumber::from([3, 5]));
/// assert_eq!(tile.x(), 3);
/// assert_eq!(tile.y(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileNumber {
    /// Column (X coordinate in the tile grid)
    x: i64,
    /// Row (Y coordinate in the tile grid)
    y: i64,
}

impl TileNumber {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Tile containing a zoom-scaled pixel coordinate.
    ///
    /// A pixel on a shared edge belongs to the tile to its right/below.
    pub fn containing(pixel: [f64; 2], tile_size: [u32; 2]) -> Self {
        Self {
            x: (pixel[0] / tile_size[0] as f64).floor() as i64,
            y: (pixel[1] / tile_size[1] as f64).floor() as i64,
        }
    }

    /// Get the tile column.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Get the tile row.
    pub fn y(&self) -> i64 {
        self.y
    }
}

impl From<[i64; 2]> for TileNumber {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(i64, i64)> for TileNumber {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for TileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A tile number at a specific zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileAddress {
    zoom: u8,
    tile: TileNumber,
}

impl TileAddress {
    pub fn new(tile: impl Into<TileNumber>, zoom: u8) -> Self {
        Self {
            tile: tile.into(),
            zoom,
        }
    }

    pub fn tile(&self) -> TileNumber {
        self.tile
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Number of tiles along one axis at this zoom (`2^zoom`), saturating.
    pub fn tiles_per_axis(zoom: u8) -> i64 {
        1_i64.checked_shl(zoom as u32).filter(|n| *n > 0).unwrap_or(i64::MAX)
    }

    /// Whether the tile lies inside the world grid at its zoom.
    pub fn is_in_world(&self) -> bool {
        let n = Self::tiles_per_axis(self.zoom);
        (0..n).contains(&self.tile.x) && (0..n).contains(&self.tile.y)
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.tile.x, self.tile.y)
    }
}
