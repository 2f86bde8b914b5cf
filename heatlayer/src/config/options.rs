//! Heatmap rendering options.

/// Default brush radius in pixels.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Default multiplier applied to the radius.
pub const DEFAULT_RADIUS_FACTOR: f64 = 1.0;

/// Default overall opacity of the colourized heatmap.
pub const DEFAULT_OPACITY: f64 = 0.8;

/// Default intensity of a point weighing half of the maximum weight.
pub const DEFAULT_INTENSITY_OF_MIDPOINT: f64 = 0.2;

/// One colour stop of the heatmap gradient.
///
/// `offset` is the intensity (0..=1) at which `color` applies; colours
/// between stops are interpolated linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: [u8; 4],
}

impl GradientStop {
    pub const fn new(offset: f64, color: [u8; 4]) -> Self {
        Self { offset, color }
    }
}

/// The default green → yellow → red ramp.
pub fn default_gradient() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.1, [128, 255, 0, 179]),
        GradientStop::new(0.2, [255, 255, 0, 204]),
        GradientStop::new(0.7, [234, 72, 58, 230]),
        GradientStop::new(1.0, [162, 36, 25, 255]),
    ]
}

/// Options read by a [`Rasterizer`](crate::raster::Rasterizer).
///
/// Owned by the tile generator and handed to its rasterizer explicitly, so
/// there is no hidden shared state between the two.
///
/// # Example
///
/// ```
/// use heatlayer::config::HeatmapOptions;
///
/// let options = HeatmapOptions::default()
///     .with_radius(15.0)
///     .with_opacity(0.6);
/// assert_eq!(options.brush_radius(), 15.0);
/// assert_eq!(options.max_weight(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapOptions {
    /// Brush radius in pixels
    radius: f64,
    /// Multiplier applied to `radius`
    radius_factor: f64,
    /// Opacity of the colourized output (0-1)
    opacity: f64,
    /// Intensity reached by a point of half the maximum weight (0-1)
    intensity_of_midpoint: f64,
    /// Colour ramp, sorted by offset
    gradient: Vec<GradientStop>,
    /// Weight normalization, never below 1
    max_weight: f64,
}

impl HeatmapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_radius_factor(mut self, factor: f64) -> Self {
        self.radius_factor = factor;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_intensity_of_midpoint(mut self, intensity: f64) -> Self {
        self.intensity_of_midpoint = intensity;
        self
    }

    /// Replace the colour ramp. Stops are sorted by offset.
    pub fn with_gradient(mut self, mut gradient: Vec<GradientStop>) -> Self {
        gradient.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self.gradient = gradient;
        self
    }

    /// Set the weight normalization, floored at 1.
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.set_max_weight(max_weight);
        self
    }

    pub(crate) fn set_max_weight(&mut self, max_weight: f64) {
        self.max_weight = max_weight.max(1.0);
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_factor(&self) -> f64 {
        self.radius_factor
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn intensity_of_midpoint(&self) -> f64 {
        self.intensity_of_midpoint
    }

    pub fn gradient(&self) -> &[GradientStop] {
        &self.gradient
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Effective brush radius: `radius * radius_factor`, never negative.
    pub fn brush_radius(&self) -> f64 {
        (self.radius * self.radius_factor).max(0.0)
    }
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            radius_factor: DEFAULT_RADIUS_FACTOR,
            opacity: DEFAULT_OPACITY,
            intensity_of_midpoint: DEFAULT_INTENSITY_OF_MIDPOINT,
            gradient: default_gradient(),
            max_weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HeatmapOptions::default();
        assert_eq!(options.radius(), DEFAULT_RADIUS);
        assert_eq!(options.radius_factor(), DEFAULT_RADIUS_FACTOR);
        assert_eq!(options.opacity(), DEFAULT_OPACITY);
        assert_eq!(options.intensity_of_midpoint(), DEFAULT_INTENSITY_OF_MIDPOINT);
        assert_eq!(options.gradient().len(), 4);
        assert_eq!(options.max_weight(), 1.0);
    }

    #[test]
    fn test_brush_radius_uses_factor() {
        let options = HeatmapOptions::default()
            .with_radius(12.0)
            .with_radius_factor(1.5);
        assert_eq!(options.brush_radius(), 18.0);
    }

    #[test]
    fn test_negative_brush_radius_clamped() {
        let options = HeatmapOptions::default().with_radius(-5.0);
        assert_eq!(options.brush_radius(), 0.0);
    }

    #[test]
    fn test_max_weight_floor() {
        assert_eq!(HeatmapOptions::default().with_max_weight(0.25).max_weight(), 1.0);
        assert_eq!(HeatmapOptions::default().with_max_weight(-3.0).max_weight(), 1.0);
        assert_eq!(HeatmapOptions::default().with_max_weight(7.0).max_weight(), 7.0);
    }

    #[test]
    fn test_gradient_sorted() {
        let options = HeatmapOptions::default().with_gradient(vec![
            GradientStop::new(1.0, [255, 0, 0, 255]),
            GradientStop::new(0.0, [0, 0, 255, 255]),
        ]);
        assert_eq!(options.gradient()[0].offset, 0.0);
        assert_eq!(options.gradient()[1].offset, 1.0);
    }

    #[test]
    fn test_builder_chain() {
        let options = HeatmapOptions::new()
            .with_opacity(0.5)
            .with_intensity_of_midpoint(0.4);
        assert_eq!(options.opacity(), 0.5);
        assert_eq!(options.intensity_of_midpoint(), 0.4);
    }
}
