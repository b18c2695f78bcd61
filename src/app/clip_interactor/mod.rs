// Clip interactor - Orchestrates the clip cutting use case

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::domain::model::*;
use crate::engine::CommandBuilder;
use crate::error::{ClipCutError, ClipCutResult};
use crate::ports::*;
use crate::utils::path::PathDeriver;
use crate::utils::time::TimestampCheck;

/// Entry point for cutting clips: derive paths, build the command, run it,
/// then optionally remove the source.
///
/// One instance may serve many concurrent requests. Requests share nothing but
/// the permit pool that bounds how many transcoders run at once.
pub struct ClipCutOrchestrator {
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    observer: Arc<dyn OutputObserver>,
    permits: Semaphore,
}

impl ClipCutOrchestrator {
    /// Create new orchestrator with injected ports
    pub fn new(
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        observer: Arc<dyn OutputObserver>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            execute_port,
            fs_port,
            observer,
            permits: Semaphore::new(max_concurrent.max(1)),
        }
    }

    /// Derive paths and build the command without running anything
    pub fn plan(request: &ClipRequest) -> ClipCutResult<(DerivedPaths, CommandSpec)> {
        let paths = PathDeriver::derive(&request.input_path, request.output_base_name.as_deref())?;
        let spec = CommandBuilder::build(
            &paths,
            &request.start_time,
            &request.end_time,
            request.quality_mode,
        );
        Ok((paths, spec))
    }

    /// Run a cut to completion
    pub async fn execute(&self, request: ClipRequest) -> ClipCutResult<CutReport> {
        info!(
            input = %request.input_path,
            start = %request.start_time,
            end = %request.end_time,
            mode = %request.quality_mode,
            "Starting cut"
        );

        let (paths, spec) = Self::plan(&request).map_err(|e| {
            error!(error = %e, "Cannot prepare cut");
            e
        })?;

        if !PathDeriver::is_supported_video(&request.input_path) {
            warn!(input = %request.input_path, "Input extension is not a known video container");
        }
        for warning in TimestampCheck::range_warnings(&request.start_time, &request.end_time) {
            warn!("{}", warning);
        }

        let output_existed = if request.delete_source_on_success {
            self.fs_port.file_exists(&paths.output_str()).await?
        } else {
            false
        };

        let outcome = {
            let _permit = self.permits.acquire().await.map_err(|_| ClipCutError::LaunchError {
                program: spec.program.clone(),
                detail: "cut scheduler is shut down".to_string(),
            })?;
            self.execute_port
                .execute(&spec, Arc::clone(&self.observer))
                .await
        };

        let exit_code = match outcome {
            ProcessOutcome::Success { exit_code } => exit_code,
            ProcessOutcome::Failure(failure) => {
                let err = ClipCutError::from(failure);
                error!(error = %err, output = %paths.output_path.display(), "Cut failed");
                return Err(err);
            }
        };

        let source_deleted = if request.delete_source_on_success {
            self.delete_source(&paths, exit_code, output_existed).await?
        } else {
            false
        };

        info!(output = %paths.output_path.display(), source_deleted, "Cut finished");

        Ok(CutReport {
            output_path: paths.output_str(),
            quality_mode: request.quality_mode,
            exit_code,
            source_deleted,
        })
    }

    /// Fire-and-forget form of [`execute`](Self::execute). Exactly one callback runs.
    ///
    /// Must be called from within a tokio runtime.
    pub fn cut<E, S>(self: &Arc<Self>, request: ClipRequest, on_error: E, on_success: S) -> JoinHandle<()>
    where
        E: FnOnce(ClipCutError) + Send + 'static,
        S: FnOnce(CutReport) + Send + 'static,
    {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            match orchestrator.execute(request).await {
                Ok(report) => on_success(report),
                Err(err) => on_error(err),
            }
        })
    }

    /// Remove the input after a successful cut. Returns whether it was removed.
    ///
    /// Only a clean exit that produced a new output file counts, whatever the
    /// exit-status policy says about the cut itself.
    async fn delete_source(
        &self,
        paths: &DerivedPaths,
        exit_code: Option<i32>,
        output_existed: bool,
    ) -> ClipCutResult<bool> {
        if paths.input_path == paths.output_path {
            warn!(path = %paths.input_path.display(), "Output overwrote the source; not deleting it");
            return Ok(false);
        }

        let output = paths.output_str();
        if exit_code != Some(0) {
            warn!(output = %output, exit_code = ?exit_code, "Transcoder did not exit cleanly; keeping source");
            return Ok(false);
        }
        if output_existed {
            warn!(output = %output, "Output file existed before the cut; keeping source");
            return Ok(false);
        }
        if !self.fs_port.file_exists(&output).await? {
            warn!(output = %output, "Output file missing after cut; keeping source");
            return Ok(false);
        }

        let input = paths.input_str();
        self.fs_port
            .delete_file(&input)
            .await
            .map_err(|e| ClipCutError::SourceDeletionError {
                path: input.clone(),
                message: e.to_string(),
            })?;

        info!(input = %input, "Deleted source file");
        Ok(true)
    }
}
