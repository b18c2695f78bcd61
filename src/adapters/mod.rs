// Adapters - External system implementations

pub mod exec_process;
pub mod fs_local;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_process::{ExecutableTable, ProcessRunner};
pub use fs_local::LocalFsAdapter;
pub use toml_config::{Settings, TomlConfigAdapter};
pub use tracing_log::TracingLogAdapter;
