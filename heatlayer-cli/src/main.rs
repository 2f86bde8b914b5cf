//! heatlayer CLI - render heatmap tiles to PNG files.
//!
//! This binary provides a command-line interface to the heatlayer library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::tile::TileArgs;
use commands::zoom::ZoomArgs;
use runner::GlobalArgs;

#[derive(Parser)]
#[command(name = "heatlayer")]
#[command(version = heatlayer::VERSION)]
#[command(about = "Render weighted geographic points as heatmap map tiles", long_about = None)]
struct Cli {
    /// Configuration file (INI); defaults to ./heatlayer.ini when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Brush radius in pixels, overriding the configuration file
    #[arg(long, global = true)]
    radius: Option<f64>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single tile
    Tile {
        /// JSON file with an array of {"coordinates": [lat, lon], "weight": w}
        #[arg(long)]
        points: PathBuf,

        /// Tile column
        #[arg(long)]
        x: i64,

        /// Tile row
        #[arg(long)]
        y: i64,

        /// Zoom level
        #[arg(long)]
        zoom: u8,

        /// Output PNG path
        #[arg(long)]
        output: PathBuf,
    },

    /// Render every tile touched by the points at one zoom level
    Zoom {
        /// JSON file with an array of {"coordinates": [lat, lon], "weight": w}
        #[arg(long)]
        points: PathBuf,

        /// Zoom level
        #[arg(long)]
        zoom: u8,

        /// Output directory; tiles are written as DIR/Z/X/Y.png
        #[arg(long)]
        output_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs {
        config: cli.config,
        radius: cli.radius,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Tile {
            points,
            x,
            y,
            zoom,
            output,
        } => commands::tile::run(
            &global,
            TileArgs {
                points,
                x,
                y,
                zoom,
                output,
            },
        ),
        Commands::Zoom {
            points,
            zoom,
            output_dir,
        } => commands::zoom::run(
            &global,
            ZoomArgs {
                points,
                zoom,
                output_dir,
            },
        ),
    };

    if let Err(e) = result {
        e.exit();
    }
}
