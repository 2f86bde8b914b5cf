//! Zoom command - render every covered tile of one zoom level.
//!
//! Tiles are rendered in parallel with rayon through a
//! [`SharedTileGenerator`], each worker taking the read lock.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use heatlayer::tile::{SharedTileGenerator, TileAddress};

use super::validate_zoom;
use crate::error::CliError;
use crate::runner::{load_points, save_png, CliRunner, GlobalArgs};

/// Arguments for the zoom command.
pub struct ZoomArgs {
    pub points: PathBuf,
    pub zoom: u8,
    pub output_dir: PathBuf,
}

/// Output path of a tile: `DIR/Z/X/Y.png`.
pub fn tile_path(output_dir: &Path, address: &TileAddress) -> PathBuf {
    output_dir
        .join(address.zoom().to_string())
        .join(address.tile().x().to_string())
        .join(format!("{}.png", address.tile().y()))
}

/// Run the zoom command.
pub fn run(global: &GlobalArgs, args: ZoomArgs) -> Result<(), CliError> {
    validate_zoom(args.zoom)?;

    let runner = CliRunner::new(global)?;
    runner.log_startup("zoom");

    let points = load_points(&args.points)?;
    let generator = SharedTileGenerator::new(runner.create_generator(&points)?);

    let tiles = generator.covered_tiles(args.zoom)?;
    println!(
        "Rendering {} tiles at zoom {} from {} points...",
        tiles.len(),
        args.zoom,
        points.len()
    );

    let start = Instant::now();
    let written = AtomicUsize::new(0);
    tiles.par_iter().try_for_each(|&tile| {
        let address = TileAddress::new(tile, args.zoom);
        let png = generator.tile(tile, args.zoom)?;
        let path = tile_path(&args.output_dir, &address);
        save_png(&path, &png)?;
        written.fetch_add(1, Ordering::Relaxed);
        debug!(tile = %address, path = %path.display(), "Tile written");
        Ok::<(), CliError>(())
    })?;

    let written = written.load(Ordering::Relaxed);
    let elapsed = start.elapsed().as_secs_f64();
    info!(zoom = args.zoom, tiles = written, elapsed, "Zoom level rendered");
    println!(
        "Wrote {} tiles to {} in {:.2}s",
        written,
        args.output_dir.join(args.zoom.to_string()).display(),
        elapsed
    );
    Ok(())
}
