// Ports - Interface definitions (contracts)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::model::*;
use crate::error::ClipCutResult;

/// Line-oriented observer for a running subprocess.
///
/// Diagnostic only: nothing an observer does changes the process outcome.
/// Lines from one stream arrive in emission order.
pub trait OutputObserver: Send + Sync {
    /// Called once per line written to standard output
    fn on_stdout(&self, _line: &str) {}

    /// Called once per line written to standard error
    fn on_stderr(&self, _line: &str) {}
}

/// Observer that drops every line
pub struct NullObserver;

impl OutputObserver for NullObserver {}

/// Port for running the external transcoding tool
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the command to completion.
    ///
    /// Resolves exactly once. Every observer callback has returned before the
    /// future completes.
    async fn execute(&self, spec: &CommandSpec, observer: Arc<dyn OutputObserver>) -> ProcessOutcome;
}

/// Port for the few file system operations the pipeline performs itself
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &str) -> ClipCutResult<bool>;

    /// Delete file
    async fn delete_file(&self, file_path: &str) -> ClipCutResult<()>;
}
