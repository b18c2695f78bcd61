// Tracing log adapter - Forwards transcoder output to tracing

use tracing::debug;

use crate::ports::OutputObserver;

/// Target used for transcoder output so it can be filtered separately,
/// e.g. `RUST_LOG=info,clipcut::transcoder=debug`
pub const TRANSCODER_TARGET: &str = "clipcut::transcoder";

/// Logs every stdout/stderr line of the transcoder at DEBUG
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputObserver for TracingLogAdapter {
    fn on_stdout(&self, line: &str) {
        debug!(target: TRANSCODER_TARGET, stream = "stdout", "{}", line);
    }

    fn on_stderr(&self, line: &str) {
        debug!(target: TRANSCODER_TARGET, stream = "stderr", "{}", line);
    }
}
