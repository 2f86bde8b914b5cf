//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a non-zero exit code.

use std::fmt;
use std::io;
use std::process;

use heatlayer::config::ConfigFileError;
use heatlayer::tile::TileGeneratorError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or holds a bad value
    Config(ConfigFileError),
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Failed to read the points file
    PointsRead { path: String, error: io::Error },
    /// Points file is not a JSON array of weighted points
    PointsParse {
        path: String,
        error: serde_json::Error,
    },
    /// Tile generation failed
    Generator(TileGeneratorError),
    /// Failed to write output file
    FileWrite { path: String, error: io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::PointsParse { .. } => {
                eprintln!();
                eprintln!("Expected a JSON array such as:");
                eprintln!(r#"  [{{"coordinates": [55.75, 37.61], "weight": 2.0}}]"#);
            }
            CliError::Generator(TileGeneratorError::InvalidPoint { .. }) => {
                eprintln!();
                eprintln!("Coordinates are [lat, lon] in degrees.");
                eprintln!("Latitude must lie within +/-85.05112878 (Web Mercator limit).");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::PointsRead { path, error } => {
                write!(f, "Failed to read points file '{}': {}", path, error)
            }
            CliError::PointsParse { path, error } => {
                write!(f, "Failed to parse points file '{}': {}", path, error)
            }
            CliError::Generator(e) => write!(f, "Tile generation failed: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::PointsRead { error, .. } => Some(error),
            CliError::PointsParse { error, .. } => Some(error),
            CliError::Generator(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<TileGeneratorError> for CliError {
    fn from(e: TileGeneratorError) -> Self {
        CliError::Generator(e)
    }
}
