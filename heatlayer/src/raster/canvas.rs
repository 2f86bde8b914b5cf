//! CPU heatmap canvas producing PNG tiles.
//!
//! Rendering happens in two passes:
//!
//! 1. every point stamps a radial brush onto a single-channel intensity
//!    buffer, accumulating with source-over (`acc + s * (1 - acc)`)
//! 2. the intensity buffer is colourized through the gradient palette and
//!    scaled by the configured opacity
//!
//! Points outside the canvas but within the brush radius still contribute
//! the part of their brush that overlaps it.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::config::HeatmapOptions;
use crate::point::WeightedPoint;
use crate::raster::palette::Palette;
use crate::raster::{Rasterizer, RasterizerError};

/// Heatmap rasterizer painting into an in-memory RGBA buffer.
///
/// # Example
///
/// ```
/// use heatlayer::point::WeightedPoint;
/// use heatlayer::raster::{CanvasRasterizer, Rasterizer};
///
/// let canvas = CanvasRasterizer::new([256, 256]);
/// let png = canvas
///     .generate_image(&[WeightedPoint::new([128.0, 128.0], 1.0)])
///     .unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
#[derive(Debug, Clone)]
pub struct CanvasRasterizer {
    size: [u32; 2],
    options: HeatmapOptions,
    palette: Palette,
    destroyed: bool,
}

impl CanvasRasterizer {
    /// Create a canvas of `[width, height]` pixels with default options.
    pub fn new(size: [u32; 2]) -> Self {
        let options = HeatmapOptions::default();
        Self {
            size,
            palette: Palette::from_stops(options.gradient()),
            options,
            destroyed: false,
        }
    }

    /// Current options, including the max weight set by the generator.
    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }

    /// Paint the intensity buffer (row-major, one value per pixel).
    fn paint_intensity(&self, points: &[WeightedPoint]) -> Vec<f64> {
        let [width, height] = self.size;
        let mut intensity = vec![0.0_f64; width as usize * height as usize];
        let radius = self.options.brush_radius();
        let exponent = midpoint_exponent(self.options.intensity_of_midpoint());
        let max_weight = self.options.max_weight();

        for point in points {
            let alpha = (point.weight / max_weight).clamp(0.0, 1.0).powf(exponent);
            if alpha <= 0.0 {
                continue;
            }
            let [px, py] = point.coordinates;

            if radius <= 0.0 {
                let (ix, iy) = (px.floor(), py.floor());
                if ix >= 0.0 && iy >= 0.0 && ix < width as f64 && iy < height as f64 {
                    let cell = &mut intensity[iy as usize * width as usize + ix as usize];
                    *cell += alpha * (1.0 - *cell);
                }
                continue;
            }

            let x_start = (px - radius).floor().max(0.0) as u32;
            let y_start = (py - radius).floor().max(0.0) as u32;
            let x_end = (px + radius).ceil().min(width as f64).max(0.0) as u32;
            let y_end = (py + radius).ceil().min(height as f64).max(0.0) as u32;

            for iy in y_start..y_end {
                let dy = iy as f64 + 0.5 - py;
                for ix in x_start..x_end {
                    let dx = ix as f64 + 0.5 - px;
                    let distance = (dx * dx + dy * dy).sqrt();
                    if distance >= radius {
                        continue;
                    }
                    let stamp = alpha * (1.0 - distance / radius);
                    let cell = &mut intensity[iy as usize * width as usize + ix as usize];
                    *cell += stamp * (1.0 - *cell);
                }
            }
        }

        intensity
    }

    fn colorize(&self, intensity: &[f64]) -> RgbaImage {
        let [width, height] = self.size;
        let opacity = self.options.opacity().clamp(0.0, 1.0);

        RgbaImage::from_fn(width, height, |x, y| {
            let value = intensity[y as usize * width as usize + x as usize];
            if value <= 0.0 {
                return Rgba([0, 0, 0, 0]);
            }
            let [r, g, b, a] = self.palette.color(value);
            Rgba([r, g, b, (a as f64 * opacity).round() as u8])
        })
    }
}

/// Exponent mapping half of the max weight to `intensity_of_midpoint`.
///
/// Falls back to a linear ramp when the midpoint is not strictly inside
/// `(0, 1)`.
fn midpoint_exponent(intensity_of_midpoint: f64) -> f64 {
    if intensity_of_midpoint > 0.0 && intensity_of_midpoint < 1.0 {
        intensity_of_midpoint.ln() / 0.5_f64.ln()
    } else {
        1.0
    }
}

impl Rasterizer for CanvasRasterizer {
    fn configure(&mut self, options: &HeatmapOptions) {
        if options.gradient() != self.options.gradient() {
            self.palette = Palette::from_stops(options.gradient());
        }
        self.options = options.clone();
    }

    fn max_weight(&self) -> f64 {
        self.options.max_weight()
    }

    fn set_max_weight(&mut self, max_weight: f64) {
        self.options.set_max_weight(max_weight);
    }

    fn brush_radius(&self) -> f64 {
        self.options.brush_radius()
    }

    fn size(&self) -> [u32; 2] {
        self.size
    }

    fn generate_image(&self, points: &[WeightedPoint]) -> Result<Vec<u8>, RasterizerError> {
        if self.destroyed {
            return Err(RasterizerError::Destroyed);
        }
        if let Some(index) = points.iter().position(|p| {
            !(p.coordinates[0].is_finite() && p.coordinates[1].is_finite() && p.weight.is_finite())
        }) {
            return Err(RasterizerError::InvalidPoint { index });
        }

        let intensity = self.paint_intensity(points);
        let image = self.colorize(&intensity);

        let mut cursor = Cursor::new(Vec::new());
        image.write_to(&mut cursor, ImageFormat::Png)?;
        Ok(cursor.into_inner())
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}
