// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ClipCutError, ClipCutResult};


/// Encoding strategy used for a cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityMode {
    /// Re-encode video with libx264 to shrink the output
    #[serde(rename = "reencode")]
    ReEncode,
    /// Copy streams untouched; cut points snap to keyframes
    #[serde(rename = "copy")]
    StreamCopy,
}

impl QualityMode {
    /// Map the "decrease quality to reduce file size" toggle onto a mode
    pub fn from_reduce_quality(reduce_quality: bool) -> Self {
        if reduce_quality {
            QualityMode::ReEncode
        } else {
            QualityMode::StreamCopy
        }
    }

    /// Parse mode from string
    pub fn parse(mode_str: &str) -> ClipCutResult<Self> {
        match mode_str.trim().to_lowercase().as_str() {
            "reencode" | "re-encode" => Ok(QualityMode::ReEncode),
            "copy" | "stream-copy" => Ok(QualityMode::StreamCopy),
            _ => Err(ClipCutError::ConfigError {
                message: format!(
                    "Invalid quality mode: {}. Valid modes: reencode, copy",
                    mode_str
                ),
            }),
        }
    }
}

impl Default for QualityMode {
    fn default() -> Self {
        QualityMode::ReEncode
    }
}

impl fmt::Display for QualityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityMode::ReEncode => write!(f, "reencode"),
            QualityMode::StreamCopy => write!(f, "copy"),
        }
    }
}

/// A single user-initiated cut
///
/// Start and end times are passed to the external tool verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    pub input_path: String,
    pub output_base_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub quality_mode: QualityMode,
    pub delete_source_on_success: bool,
}

impl ClipRequest {
    /// Create a request with default mode and no deletion
    pub fn new(
        input_path: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_base_name: None,
            start_time: start_time.into(),
            end_time: end_time.into(),
            quality_mode: QualityMode::default(),
            delete_source_on_success: false,
        }
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_base_name = Some(name.into());
        self
    }

    pub fn with_quality_mode(mut self, mode: QualityMode) -> Self {
        self.quality_mode = mode;
        self
    }

    pub fn with_delete_source(mut self, delete: bool) -> Self {
        self.delete_source_on_success = delete;
        self
    }
}

/// Input and output locations for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl DerivedPaths {
    pub fn input_str(&self) -> String {
        self.input_path.to_string_lossy().into_owned()
    }

    pub fn output_str(&self) -> String {
        self.output_path.to_string_lossy().into_owned()
    }
}

/// Program alias plus the exact argument vector handed to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-like rendering for logs and dry runs. Never executed through a shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " '{}'", arg.replace('\'', "'\\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Characters a POSIX shell would treat specially outside quotes
const SHELL_SPECIAL: &str = "'\"`$\\;&|<>()[]{}*?!#~";

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || SHELL_SPECIAL.contains(c))
}

/// Why a subprocess run did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessFailure {
    /// Executable could not be spawned
    Launch { program: String, detail: String },
    /// Process exited unsuccessfully and the exit status was inspected
    Execution {
        program: String,
        exit_code: Option<i32>,
        detail: String,
    },
}

/// Terminal result of one subprocess run, delivered exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success { exit_code: Option<i32> },
    Failure(ProcessFailure),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Success { .. })
    }
}

/// Whether a non-zero exit counts as failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStatusPolicy {
    /// Any process close is a success
    Ignore,
    /// Non-zero exit or signal death is an execution failure
    Inspect,
}

impl Default for ExitStatusPolicy {
    fn default() -> Self {
        ExitStatusPolicy::Ignore
    }
}

/// What a successful cut produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutReport {
    pub output_path: String,
    pub quality_mode: QualityMode,
    pub exit_code: Option<i32>,
    pub source_deleted: bool,
}
