//! Command construction for the two clipping strategies
//!
//! Each strategy lives in its own module and owns the exact FFmpeg argument
//! order it needs. `CommandBuilder` only dispatches on [`QualityMode`].

use crate::domain::model::{CommandSpec, DerivedPaths, QualityMode};

pub mod copy;
pub mod reencode;

pub use copy::StreamCopyClipper;
pub use reencode::ReencodeClipper;

/// Builds the argument vector for a cut. Pure: no I/O and no failure path.
pub struct CommandBuilder;

impl CommandBuilder {
    pub fn build(
        paths: &DerivedPaths,
        start_time: &str,
        end_time: &str,
        mode: QualityMode,
    ) -> CommandSpec {
        match mode {
            QualityMode::ReEncode => ReencodeClipper::command(paths, start_time, end_time),
            QualityMode::StreamCopy => StreamCopyClipper::command(paths, start_time, end_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths() -> DerivedPaths {
        DerivedPaths {
            input_path: PathBuf::from("/videos/trip.mov"),
            output_path: PathBuf::from("/videos/trip-cut.mp4"),
        }
    }

    #[test]
    fn test_dispatch_selects_program_alias() {
        let reencode_spec =
            CommandBuilder::build(&paths(), "00:00:10", "00:00:20", QualityMode::ReEncode);
        let copy_spec =
            CommandBuilder::build(&paths(), "00:00:10", "00:00:20", QualityMode::StreamCopy);
        assert_eq!(reencode_spec.program, reencode::PROGRAM_ALIAS);
        assert_eq!(copy_spec.program, copy::PROGRAM_ALIAS);
        assert_ne!(reencode_spec.args, copy_spec.args);
    }

    #[test]
    fn test_build_is_deterministic() {
        for mode in [QualityMode::ReEncode, QualityMode::StreamCopy] {
            let first = CommandBuilder::build(&paths(), "00:01:00", "00:02:00", mode);
            let second = CommandBuilder::build(&paths(), "00:01:00", "00:02:00", mode);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_output_path_is_last_argument() {
        for mode in [QualityMode::ReEncode, QualityMode::StreamCopy] {
            let spec = CommandBuilder::build(&paths(), "a", "b", mode);
            assert_eq!(spec.args.last().map(String::as_str), Some("/videos/trip-cut.mp4"));
        }
    }
}
