//! Output path derivation

use crate::domain::model::DerivedPaths;
use crate::error::{ClipCutError, ClipCutResult};
use std::path::Path;

/// Container extension every cut is written with
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Suffix appended to the input stem when no output name is given
pub const DEFAULT_NAME_SUFFIX: &str = "-cut";

/// Extensions offered by the file picker
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "webm"];

/// Computes where a cut is written. Pure path arithmetic, no filesystem access.
pub struct PathDeriver;

impl PathDeriver {
    /// Derive the output path as a sibling of the input.
    ///
    /// A blank `output_base_name` falls back to `<input-stem>-cut`. A given name is
    /// used verbatim, so `clip.mov` becomes `clip.mov.mp4`.
    pub fn derive(input_path: &str, output_base_name: Option<&str>) -> ClipCutResult<DerivedPaths> {
        let path = Path::new(input_path);

        if path.extension().is_none() {
            return Err(path_error(input_path, "no file extension"));
        }

        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| path_error(input_path, "no parent directory"))?;

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .ok_or_else(|| path_error(input_path, "no file name"))?;

        let base_name = match output_base_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}{}", stem, DEFAULT_NAME_SUFFIX),
        };

        Ok(DerivedPaths {
            input_path: path.to_path_buf(),
            output_path: parent.join(format!("{}.{}", base_name, OUTPUT_EXTENSION)),
        })
    }

    /// Whether the input has one of the extensions the picker offers
    pub fn is_supported_video(input_path: &str) -> bool {
        Path::new(input_path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .map(|ext| SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

fn path_error(path: &str, reason: &str) -> ClipCutError {
    ClipCutError::PathError {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
