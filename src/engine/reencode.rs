//! Re-encoding strategy

use crate::domain::model::{CommandSpec, DerivedPaths};

/// Alias the re-encode command is launched under
pub const PROGRAM_ALIAS: &str = "ffmpeg";

/// Video encoder used when shrinking the output
pub const VIDEO_CODEC: &str = "libx264";

/// Constant Rate Factor for the re-encode
pub const CRF: &str = "24";

/// Re-encodes video with libx264 to reduce file size.
///
/// `-ss`/`-to` follow `-i`, so seeking happens on the decoded stream and accuracy
/// depends on FFmpeg's own seek handling.
pub struct ReencodeClipper;

impl ReencodeClipper {
    /// `-i <in> -vcodec libx264 -crf 24 -ss <start> -to <end> <out>`
    pub fn command(paths: &DerivedPaths, start_time: &str, end_time: &str) -> CommandSpec {
        let args = vec![
            "-i".to_string(),
            paths.input_str(),
            "-vcodec".to_string(),
            VIDEO_CODEC.to_string(),
            "-crf".to_string(),
            CRF.to_string(),
            "-ss".to_string(),
            start_time.to_string(),
            "-to".to_string(),
            end_time.to_string(),
            paths.output_str(),
        ];

        CommandSpec::new(PROGRAM_ALIAS, args)
    }
}
