//! Colour lookup table built from gradient stops.

use crate::config::GradientStop;

/// Number of entries in a palette; intensity is quantized to this many steps.
pub const PALETTE_SIZE: usize = 256;

/// 256-entry RGBA lookup table indexed by quantized intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Interpolate `stops` (sorted by offset) into a lookup table.
    ///
    /// Intensities below the first stop take the first colour, above the
    /// last stop the last colour. No stops yields a fully transparent
    /// palette.
    pub fn from_stops(stops: &[GradientStop]) -> Self {
        let colors = (0..PALETTE_SIZE)
            .map(|i| color_at(stops, i as f64 / (PALETTE_SIZE - 1) as f64))
            .collect();
        Self { colors }
    }

    /// Colour for an intensity in `0..=1`.
    #[inline]
    pub fn color(&self, intensity: f64) -> [u8; 4] {
        let index = (intensity.clamp(0.0, 1.0) * (PALETTE_SIZE - 1) as f64).round() as usize;
        self.colors[index.min(PALETTE_SIZE - 1)]
    }
}

fn color_at(stops: &[GradientStop], t: f64) -> [u8; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0, 0, 0, 0];
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t >= lo.offset && t <= hi.offset {
            let span = hi.offset - lo.offset;
            let k = if span > 0.0 { (t - lo.offset) / span } else { 1.0 };
            return lerp(lo.color, hi.color, k);
        }
    }
    last.color
}

fn lerp(a: [u8; 4], b: [u8; 4], k: f64) -> [u8; 4] {
    let mut out = [0u8; 4];
    for channel in 0..4 {
        let value = a[channel] as f64 + (b[channel] as f64 - a[channel] as f64) * k;
        out[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}
