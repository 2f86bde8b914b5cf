//! Tile command - render one tile to a PNG file.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use heatlayer::tile::{TileAddress, TileNumber};

use super::validate_zoom;
use crate::error::CliError;
use crate::runner::{load_points, save_png, CliRunner, GlobalArgs};

/// Arguments for the tile command.
pub struct TileArgs {
    pub points: PathBuf,
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
    pub output: PathBuf,
}

/// Run the tile command.
pub fn run(global: &GlobalArgs, args: TileArgs) -> Result<(), CliError> {
    validate_zoom(args.zoom)?;
    let address = TileAddress::new(TileNumber::new(args.x, args.y), args.zoom);
    if !address.is_in_world() {
        return Err(CliError::InvalidArgument(format!(
            "tile {} is outside the {}x{} grid of zoom {}",
            address.tile(),
            TileAddress::tiles_per_axis(args.zoom),
            TileAddress::tiles_per_axis(args.zoom),
            args.zoom
        )));
    }

    let runner = CliRunner::new(global)?;
    runner.log_startup("tile");

    let points = load_points(&args.points)?;
    let generator = runner.create_generator(&points)?;

    let start = Instant::now();
    let png = generator.tile(address.tile(), address.zoom())?;
    info!(tile = %address, bytes = png.len(), "Tile rendered");

    save_png(&args.output, &png)?;

    println!(
        "Rendered tile {} from {} points in {:.2}s",
        address,
        points.len(),
        start.elapsed().as_secs_f64()
    );
    println!("Saved to {}", args.output.display());
    Ok(())
}
