//! Configuration file handling for `heatlayer.ini`.
//!
//! ```ini
//! [heatmap]
//! radius = 15
//! radius_factor = 1.0
//! opacity = 0.8
//! intensity_of_midpoint = 0.2
//!
//! [logging]
//! directory = logs
//! file = heatlayer.log
//! ```
//!
//! Missing files, sections and keys fall back to defaults.

use ini::{Ini, Properties};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::HeatmapOptions;
use crate::logging::{default_log_dir, default_log_file};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "heatlayer.ini";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(default_log_dir()),
            file: default_log_file().to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub heatmap: HeatmapOptions,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn parse(contents: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str(contents).map_err(ini::Error::Parse)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigFileError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("heatmap")) {
            let mut heatmap = config.heatmap;
            if let Some(radius) = parse_f64(section, "heatmap", "radius", |v| {
                (v >= 0.0).then_some(()).ok_or("must be non-negative")
            })? {
                heatmap = heatmap.with_radius(radius);
            }
            if let Some(factor) = parse_f64(section, "heatmap", "radius_factor", |v| {
                (v >= 0.0).then_some(()).ok_or("must be non-negative")
            })? {
                heatmap = heatmap.with_radius_factor(factor);
            }
            if let Some(opacity) = parse_f64(section, "heatmap", "opacity", |v| {
                (0.0..=1.0)
                    .contains(&v)
                    .then_some(())
                    .ok_or("must be between 0 and 1")
            })? {
                heatmap = heatmap.with_opacity(opacity);
            }
            if let Some(intensity) = parse_f64(section, "heatmap", "intensity_of_midpoint", |v| {
                (v > 0.0 && v < 1.0)
                    .then_some(())
                    .ok_or("must be strictly between 0 and 1")
            })? {
                heatmap = heatmap.with_intensity_of_midpoint(intensity);
            }
            config.heatmap = heatmap;
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(directory) = section.get("directory") {
                config.logging.directory = PathBuf::from(directory.trim());
            }
            if let Some(file) = section.get("file") {
                config.logging.file = file.trim().to_string();
            }
        }

        Ok(config)
    }
}

fn parse_f64(
    section: &Properties,
    section_name: &str,
    key: &str,
    check: impl Fn(f64) -> Result<(), &'static str>,
) -> Result<Option<f64>, ConfigFileError> {
    let Some(raw) = section.get(key) else {
        return Ok(None);
    };
    let invalid = |reason: &str| ConfigFileError::InvalidValue {
        section: section_name.to_string(),
        key: key.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }
    check(value).map_err(invalid)?;
    Ok(Some(value))
}
