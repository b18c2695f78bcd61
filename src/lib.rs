//! Clip Cutter Library
//!
//! Cuts a clip out of a video by deriving an output path, building an FFmpeg
//! argument vector for either a re-encode or a lossless stream copy, and running
//! FFmpeg as a subprocess.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{ClipCutOrchestrator, DefaultAppContainer};
pub use domain::model::{
    ClipRequest, CommandSpec, CutReport, DerivedPaths, ExitStatusPolicy, ProcessFailure,
    ProcessOutcome, QualityMode,
};
pub use engine::CommandBuilder;
pub use error::{ClipCutError, ClipCutResult};
pub use utils::path::PathDeriver;
