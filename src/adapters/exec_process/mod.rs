//! Subprocess execution adapter
//!
//! Launches the transcoding tool directly (never through a shell), forwards its
//! output line by line to an [`OutputObserver`] and reports a single
//! [`ProcessOutcome`] once the process has closed.

use std::collections::{BTreeMap, VecDeque};
use std::process::Stdio;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::engine::{copy, reencode};
use crate::ports::*;

/// Binary used for the built-in aliases when nothing else is configured
pub const DEFAULT_BINARY: &str = "ffmpeg";

/// Number of trailing stderr lines kept for failure details
pub const STDERR_TAIL_LINES: usize = 20;

/// Maps program aliases to the binaries that are actually launched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutableTable {
    aliases: BTreeMap<String, String>,
}

impl ExecutableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>, binary: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), binary.into());
        self
    }

    /// Point both built-in aliases at one binary
    pub fn with_binary_for_all(self, binary: &str) -> Self {
        self.with_alias(reencode::PROGRAM_ALIAS, binary)
            .with_alias(copy::PROGRAM_ALIAS, binary)
    }

    /// Binary for an alias. Built-in aliases default to `ffmpeg` on `PATH`;
    /// anything else is launched as given.
    pub fn resolve<'a>(&'a self, alias: &'a str) -> &'a str {
        if let Some(binary) = self.aliases.get(alias) {
            return binary;
        }
        if alias == reencode::PROGRAM_ALIAS || alias == copy::PROGRAM_ALIAS {
            DEFAULT_BINARY
        } else {
            alias
        }
    }
}

/// Runs one external process per call. Holds no per-run state.
pub struct ProcessRunner {
    executables: ExecutableTable,
    exit_policy: ExitStatusPolicy,
}

impl ProcessRunner {
    pub fn new(executables: ExecutableTable, exit_policy: ExitStatusPolicy) -> Self {
        Self {
            executables,
            exit_policy,
        }
    }

    /// Launch `spec` and wait for it to close
    pub async fn run(&self, spec: &CommandSpec, observer: Arc<dyn OutputObserver>) -> ProcessOutcome {
        let binary = self.executables.resolve(&spec.program);
        info!(program = %spec.program, binary, command = %spec, "Launching transcoder");

        let spawned = Command::new(binary)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                warn!(program = %spec.program, binary, error = %e, "Failed to spawn transcoder");
                return ProcessOutcome::Failure(ProcessFailure::Launch {
                    program: spec.program.clone(),
                    detail: format!("{}: {}", binary, e),
                });
            }
        };

        let stderr_tail = Arc::new(Mutex::new(VecDeque::with_capacity(STDERR_TAIL_LINES)));

        let stdout_task = child.stdout.take().map(|stdout| {
            let observer = Arc::clone(&observer);
            spawn_drain(stdout, move |line| observer.on_stdout(line))
        });
        let stderr_task = child.stderr.take().map(|stderr| {
            let observer = Arc::clone(&observer);
            let tail = Arc::clone(&stderr_tail);
            spawn_drain(stderr, move |line| {
                observer.on_stderr(line);
                let mut guard = tail.lock().unwrap_or_else(|e| e.into_inner());
                if guard.len() == STDERR_TAIL_LINES {
                    guard.pop_front();
                }
                guard.push_back(line.to_string());
            })
        });

        let status = child.wait().await;

        // All line callbacks finish before the outcome is handed out.
        for task in [stdout_task, stderr_task].into_iter().flatten() {
            if let Err(e) = task.await {
                warn!(error = %e, "Output reader task ended abnormally");
            }
        }

        let tail: Vec<String> = stderr_tail
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect();

        match status {
            Ok(status) => self.classify(spec, status.success(), status.code(), tail),
            Err(e) => ProcessOutcome::Failure(ProcessFailure::Execution {
                program: spec.program.clone(),
                exit_code: None,
                detail: format!("failed to wait for process: {}", e),
            }),
        }
    }

    fn classify(
        &self,
        spec: &CommandSpec,
        success: bool,
        exit_code: Option<i32>,
        stderr_tail: Vec<String>,
    ) -> ProcessOutcome {
        if success {
            debug!(program = %spec.program, ?exit_code, "Transcoder exited");
            return ProcessOutcome::Success { exit_code };
        }

        match self.exit_policy {
            ExitStatusPolicy::Ignore => {
                warn!(
                    program = %spec.program,
                    ?exit_code,
                    "Transcoder exited unsuccessfully; treating as success because exit status is not inspected"
                );
                ProcessOutcome::Success { exit_code }
            }
            ExitStatusPolicy::Inspect => {
                let detail = if stderr_tail.is_empty() {
                    "no diagnostic output".to_string()
                } else {
                    stderr_tail.join("\n")
                };
                ProcessOutcome::Failure(ProcessFailure::Execution {
                    program: spec.program.clone(),
                    exit_code,
                    detail,
                })
            }
        }
    }
}

#[async_trait]
impl ExecutePort for ProcessRunner {
    async fn execute(&self, spec: &CommandSpec, observer: Arc<dyn OutputObserver>) -> ProcessOutcome {
        self.run(spec, observer).await
    }
}

/// Read `reader` to the end, calling `on_line` per `\n`-terminated line.
/// Invalid UTF-8 is replaced rather than aborting the read, so the pipe never fills up.
fn spawn_drain<R, F>(reader: R, mut on_line: F) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    F: FnMut(&str) + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    on_line(line.trim_end_matches(|c: char| c == '\n' || c == '\r'));
                }
                Err(e) => {
                    debug!(error = %e, "Stopped reading process output");
                    break;
                }
            }
        }
    })
}
