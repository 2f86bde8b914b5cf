//! Coordinate conversion module
//!
//! Provides the [`Projection`] capability that maps geographic coordinates
//! (latitude/longitude) to global pixel coordinates and back, plus the
//! spherical Web Mercator implementation used by default.

mod types;

pub use types::{
    CoordError, GeoCoord, PixelCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
    WORLD_SIZE,
};

use std::f64::consts::PI;

/// Bidirectional mapping between geographic and global pixel coordinates.
///
/// Implementations must be pure and deterministic, and the two directions
/// must invert each other at the same zoom within floating point tolerance.
pub trait Projection: Send + Sync {
    /// Converts `[lat, lon]` into global pixels at `zoom`.
    fn to_global_pixels(&self, point: GeoCoord, zoom: u8) -> Result<PixelCoord, CoordError>;

    /// Converts global pixels at `zoom` back into `[lat, lon]`.
    fn from_global_pixels(&self, pixels: PixelCoord, zoom: u8) -> Result<GeoCoord, CoordError>;
}

/// Spherical Web Mercator projection with a 256 pixel world at zoom 0.
///
/// # Example
///
/// ```
/// use heatlayer::coord::{Projection, WebMercatorProjection};
///
/// let projection = WebMercatorProjection;
/// let pixels = projection.to_global_pixels([0.0, 0.0], 0).unwrap();
/// assert_eq!(pixels, [128.0, 128.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercatorProjection;

#[inline]
fn world_size(zoom: u8) -> Result<f64, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(WORLD_SIZE * 2.0_f64.powi(zoom as i32))
}

#[inline]
fn ensure_finite(point: [f64; 2]) -> Result<(), CoordError> {
    if point[0].is_finite() && point[1].is_finite() {
        Ok(())
    } else {
        Err(CoordError::NonFinite {
            x: point[0],
            y: point[1],
        })
    }
}

impl Projection for WebMercatorProjection {
    fn to_global_pixels(&self, point: GeoCoord, zoom: u8) -> Result<PixelCoord, CoordError> {
        ensure_finite(point)?;
        let [lat, lon] = point;
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        let size = world_size(zoom)?;

        let x = (lon + 180.0) / 360.0 * size;
        let lat_rad = lat * PI / 180.0;
        let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;

        Ok([x, y])
    }

    fn from_global_pixels(&self, pixels: PixelCoord, zoom: u8) -> Result<GeoCoord, CoordError> {
        ensure_finite(pixels)?;
        let size = world_size(zoom)?;

        let lon = pixels[0] / size * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * pixels[1] / size)).sinh().atan();
        let lat = lat_rad * 180.0 / PI;

        Ok([lat, lon])
    }
}

#[cfg(test)]
mod tests;
