//! Configuration types for heatlayer components.
//!
//! - [`HeatmapOptions`]: rendering options owned by the tile generator and
//!   passed to its rasterizer
//! - [`ConfigFile`]: optional `heatlayer.ini` overriding those options and
//!   the log location
//!
//! # Example
//!
//! ```
//! use heatlayer::config::{ConfigFile, HeatmapOptions};
//!
//! let config = ConfigFile::parse("[heatmap]\nradius = 20\n").unwrap();
//! assert_eq!(config.heatmap.radius(), 20.0);
//! assert_eq!(HeatmapOptions::default().radius(), 10.0);
//! ```

mod file;
mod options;

pub use file::{ConfigFile, ConfigFileError, LoggingSettings, DEFAULT_CONFIG_FILE};
pub use options::{
    default_gradient, GradientStop, HeatmapOptions, DEFAULT_INTENSITY_OF_MIDPOINT,
    DEFAULT_OPACITY, DEFAULT_RADIUS, DEFAULT_RADIUS_FACTOR,
};
