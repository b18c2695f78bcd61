//! Clip Cutter CLI
//!
//! Trims a video between two timestamps by handing the work to FFmpeg.
//!
//! # Usage
//!
//! ```bash
//! clipcut cut --input /videos/trip.mov --start 00:00:10 --end 00:00:20
//! clipcut cut -i /videos/trip.mov -s 00:00:10 -e 00:00:20 --name highlight --mode copy
//! clipcut plan -i /videos/trip.mov -s 00:00:10 -e 00:00:20 --json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clip_cutter::cli::{commands, Cli, Commands};
use clip_cutter::config_initialization::initialize_configuration;
use clip_cutter::utils::logging::init_logging;

/// Main entry point for the Clip Cutter CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = initialize_configuration(&cli)?;
    init_logging(&settings.logging.level, settings.logging.format)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Clip Cutter");

    match cli.command {
        Commands::Cut(args) => commands::cut(args, &settings).await?,
        Commands::Plan(args) => commands::plan(args, &settings)?,
    }

    Ok(())
}
