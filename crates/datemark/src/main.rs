//! datemark CLI - stamp photos with their capture date.
//!
//! Reads each image's EXIF capture timestamp and draws it onto the photo
//! as a text watermark, writing stamped copies to a sibling directory.
//! Files without a capture date get today's date.
//!
//! # Usage
//!
//! ```bash
//! # Stamp every image in a directory
//! datemark ./photos/
//!
//! # Stamp a single file, bigger text in the corner of your choice
//! datemark holiday.jpg --font_size 48 --position top-right
//!
//! # Hex colors work too
//! datemark ./photos/ --color '#FFD700'
//! ```

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod logging;

use cli::run::RunOptions;
use cli::Position;
use datemark_core::{Color, WatermarkSpec};

/// Stamp photos with their capture date as a text watermark.
#[derive(Parser, Debug)]
#[command(name = "datemark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image file or directory to process
    image_path: PathBuf,

    /// Font size in pixels for the watermark text
    #[arg(long = "font_size", default_value_t = 36, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: u32,

    /// Watermark color: a name like "white" or hex like "#RRGGBB"
    #[arg(long, default_value = "white")]
    color: Color,

    /// Watermark position
    #[arg(long, value_enum, default_value_t = Position::BottomRight)]
    position: Position,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match datemark_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}\n  Using default configuration.");
            datemark_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("datemark v{}", datemark_core::VERSION);

    let options = RunOptions {
        input: cli.image_path,
        spec: WatermarkSpec {
            font_size: cli.font_size,
            color: cli.color,
            anchor: cli.position.into(),
        },
    };
    cli::run::execute(&options, &config)?;
    Ok(())
}
