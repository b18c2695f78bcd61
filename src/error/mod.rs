//! Error handling module for Clip Cutter

use thiserror::Error;

use crate::domain::model::ProcessFailure;

/// Main error type for clip cutting operations
#[derive(Error, Debug)]
pub enum ClipCutError {
    /// Input path has no usable directory, stem or extension
    #[error("Cannot derive output path from '{path}': {reason}")]
    PathError { path: String, reason: String },

    /// External tool could not be started
    #[error("Failed to launch '{program}': {detail}")]
    LaunchError { program: String, detail: String },

    /// External tool ran but reported failure (only with exit-status inspection)
    #[error("'{program}' failed ({}): {detail}", describe_exit(.exit_code))]
    ExecutionError {
        program: String,
        exit_code: Option<i32>,
        detail: String,
    },

    /// Cut succeeded but the requested source deletion did not
    #[error("Failed to delete source file {path}: {message}")]
    SourceDeletionError { path: String, message: String },

    /// Configuration file or value is invalid
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for clip cutting operations
pub type ClipCutResult<T> = std::result::Result<T, ClipCutError>;

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<ProcessFailure> for ClipCutError {
    fn from(failure: ProcessFailure) -> Self {
        match failure {
            ProcessFailure::Launch { program, detail } => {
                ClipCutError::LaunchError { program, detail }
            }
            ProcessFailure::Execution {
                program,
                exit_code,
                detail,
            } => ClipCutError::ExecutionError {
                program,
                exit_code,
                detail,
            },
        }
    }
}
