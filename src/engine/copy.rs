//! Stream copy implementation

use crate::domain::model::{CommandSpec, DerivedPaths};

/// Alias the lossless command is launched under
pub const PROGRAM_ALIAS: &str = "ffmpeg-full-quality";

/// Stream copy clipper for lossless operations.
///
/// No re-encoding happens, so cut points snap to the nearest keyframe and the
/// clip boundaries can differ from the requested ones.
pub struct StreamCopyClipper;

impl StreamCopyClipper {
    /// `-i <in> -ss <start> -to <end> -c copy <out>`
    pub fn command(paths: &DerivedPaths, start_time: &str, end_time: &str) -> CommandSpec {
        let args = vec![
            "-i".to_string(),
            paths.input_str(),
            "-ss".to_string(),
            start_time.to_string(),
            "-to".to_string(),
            end_time.to_string(),
            "-c".to_string(),
            "copy".to_string(),
            paths.output_str(),
        ];

        CommandSpec::new(PROGRAM_ALIAS, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_paths_with_spaces_stay_single_tokens() {
        let paths = DerivedPaths {
            input_path: PathBuf::from("/my videos/a b.mov"),
            output_path: PathBuf::from("/my videos/a b-cut.mp4"),
        };
        let spec = StreamCopyClipper::command(&paths, "00:00:01", "00:00:02");
        assert_eq!(spec.args.len(), 9);
        assert_eq!(spec.args[1], "/my videos/a b.mov");
        assert_eq!(spec.args[8], "/my videos/a b-cut.mp4");
    }
}
