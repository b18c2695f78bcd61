//! CLI module for Clip Cutter
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Clip Cutter
///
/// Trims a video between two timestamps by running FFmpeg.
#[derive(Parser, Debug)]
#[command(name = "clipcut")]
#[command(about = "Clip Cutter - trim a video between two timestamps")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level or filter directive (overrides the config file)
    #[arg(long, env = "CLIPCUT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Path to a TOML config file (default: ./clipcut.toml if present)
    #[arg(long, env = "CLIPCUT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// FFmpeg binary used for both cut strategies
    #[arg(long, env = "CLIPCUT_FFMPEG", global = true)]
    pub ffmpeg: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut a clip out of a video file
    Cut(args::CutArgs),
    /// Show the output path and FFmpeg command without running it
    Plan(args::PlanArgs),
}
