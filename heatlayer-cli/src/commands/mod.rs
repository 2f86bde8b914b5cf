//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`tile`] - Render a single tile
//! - [`zoom`] - Render all covered tiles of a zoom level in parallel

pub mod tile;
pub mod zoom;

use heatlayer::coord::MAX_ZOOM;

use crate::error::CliError;

/// Reject zoom levels the projection cannot handle.
pub(crate) fn validate_zoom(zoom: u8) -> Result<(), CliError> {
    if zoom > MAX_ZOOM {
        return Err(CliError::InvalidArgument(format!(
            "zoom level must be between 0 and {}, got {}",
            MAX_ZOOM, zoom
        )));
    }
    Ok(())
}
