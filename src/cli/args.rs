//! Command-line argument definitions

use std::path::Path;

use clap::Args;

use crate::domain::model::{ClipRequest, QualityMode};
use crate::error::ClipCutResult;

/// Arguments shared by every command that describes a clip
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Start time, passed to FFmpeg as given (e.g. 00:00:10)
    #[arg(short, long)]
    pub start: String,

    /// End time, passed to FFmpeg as given (e.g. 00:00:20)
    #[arg(short, long)]
    pub end: String,

    /// Output file name without directory (default: <input>-cut); .mp4 is always appended
    #[arg(short, long)]
    pub name: Option<String>,

    /// Cut strategy: reencode (smaller file) or copy (lossless, keyframe aligned)
    #[arg(short, long, default_value = "reencode")]
    pub mode: String,

    /// Delete the input file after a successful cut
    #[arg(long)]
    pub delete_source: bool,
}

impl ClipArgs {
    /// Build the request, resolving a relative input against the working directory
    pub fn to_request(&self) -> ClipCutResult<ClipRequest> {
        let mode = QualityMode::parse(&self.mode)?;

        let input = Path::new(&self.input);
        let input_path = if input.is_absolute() || self.input.is_empty() {
            self.input.clone()
        } else {
            std::env::current_dir()?
                .join(input)
                .to_string_lossy()
                .into_owned()
        };

        let mut request = ClipRequest::new(input_path, self.start.clone(), self.end.clone())
            .with_quality_mode(mode)
            .with_delete_source(self.delete_source);
        if let Some(name) = &self.name {
            request = request.with_output_name(name.clone());
        }

        Ok(request)
    }
}

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    #[command(flatten)]
    pub clip: ClipArgs,

    /// Treat a non-zero FFmpeg exit status as failure
    #[arg(long)]
    pub check_exit_status: bool,

    /// Maximum number of FFmpeg processes running at once
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub clip: ClipArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}
