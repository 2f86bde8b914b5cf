//! Weighted point type shared by every stage of tile generation.

use serde::{Deserialize, Serialize};

/// A point with an intensity weight.
///
/// The same type carries coordinates in every space the generator works
/// with: `[lat, lon]` when supplied by or returned to the caller, `[x, y]`
/// global pixels while stored, and `[x, y]` tile-local pixels when handed to
/// a rasterizer.
///
/// Deserializes from `{"coordinates": [55.75, 37.61], "weight": 3}`; a
/// missing weight defaults to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub weight: f64,
}

impl WeightedPoint {
    pub fn new(coordinates: [f64; 2], weight: f64) -> Self {
        Self {
            coordinates,
            weight,
        }
    }

    /// Same weight, different coordinates.
    #[inline]
    pub fn with_coordinates(self, coordinates: [f64; 2]) -> Self {
        Self {
            coordinates,
            weight: self.weight,
        }
    }
}
