//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, point loading and
//! generator construction shared by the render commands.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use heatlayer::config::{ConfigFile, HeatmapOptions};
use heatlayer::layer::HeatmapLayer;
use heatlayer::log::TracingLogger;
use heatlayer::logging::{init_logging, LoggingGuard};
use heatlayer::point::WeightedPoint;
use heatlayer::tile::HeatmapTileGenerator;

use crate::error::CliError;

/// Settings given on the command line that apply to every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<std::path::PathBuf>,
    pub radius: Option<f64>,
    pub verbose: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    options: HeatmapOptions,
}

impl CliRunner {
    /// Load config, apply command-line overrides and initialize logging.
    pub fn new(global: &GlobalArgs) -> Result<Self, CliError> {
        let config_path = global
            .config
            .clone()
            .unwrap_or_else(|| heatlayer::config::DEFAULT_CONFIG_FILE.into());
        let config = ConfigFile::load_from(&config_path)?;

        let mut options = config.heatmap;
        if let Some(radius) = global.radius {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(CliError::InvalidArgument(format!(
                    "radius must be a non-negative number, got {}",
                    radius
                )));
            }
            options = options.with_radius(radius);
        }

        let level = if global.verbose { "debug" } else { "info" };
        let logging_guard = init_logging(&config.logging.directory, &config.logging.file, level)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            options,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("heatlayer v{}", heatlayer::VERSION);
        info!("heatlayer CLI: {} command", command);
    }

    /// Build a Web Mercator generator holding `points`.
    pub fn create_generator(
        &self,
        points: &[WeightedPoint],
    ) -> Result<HeatmapTileGenerator, CliError> {
        let layer = Arc::new(HeatmapLayer::web_mercator());
        let mut generator =
            HeatmapTileGenerator::new(layer, None)?.with_logger(Arc::new(TracingLogger));
        generator.set_options(self.options.clone())?;
        generator.set_points(points)?;

        info!(
            points = points.len(),
            max_weight = generator.max_weight()?,
            brush_radius = self.options.brush_radius(),
            "Generator ready"
        );
        Ok(generator)
    }
}

/// Write PNG bytes to `path`, creating parent directories.
pub fn save_png(path: &Path, data: &[u8]) -> Result<(), CliError> {
    let file_write = |error: std::io::Error| CliError::FileWrite {
        path: path.display().to_string(),
        error,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(file_write)?;
    }
    fs::write(path, data).map_err(file_write)
}

/// Read a JSON array of weighted points.
pub fn load_points(path: &Path) -> Result<Vec<WeightedPoint>, CliError> {
    let contents = fs::read_to_string(path).map_err(|error| CliError::PointsRead {
        path: path.display().to_string(),
        error,
    })?;
    serde_json::from_str(&contents).map_err(|error| CliError::PointsParse {
        path: path.display().to_string(),
        error,
    })
}
