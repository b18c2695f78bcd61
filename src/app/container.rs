use std::sync::Arc;

use crate::adapters::{LocalFsAdapter, ProcessRunner, Settings, TracingLogAdapter};
use crate::app::clip_interactor::ClipCutOrchestrator;
use crate::ports::{ExecutePort, FsPort, OutputObserver};

/// Wires the production adapters into the orchestrator
pub struct DefaultAppContainer {
    orchestrator: Arc<ClipCutOrchestrator>,
}

impl DefaultAppContainer {
    pub fn new(settings: &Settings) -> Self {
        let execute_port = Arc::new(ProcessRunner::new(
            settings.executables.clone(),
            settings.cut.exit_status,
        ));
        let fs_port = Arc::new(LocalFsAdapter::new());
        let observer = Arc::new(TracingLogAdapter::new());

        let orchestrator = Arc::new(ClipCutOrchestrator::new(
            execute_port as Arc<dyn ExecutePort>,
            fs_port as Arc<dyn FsPort>,
            observer as Arc<dyn OutputObserver>,
            settings.cut.max_concurrent,
        ));

        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> Arc<ClipCutOrchestrator> {
        Arc::clone(&self.orchestrator)
    }
}
