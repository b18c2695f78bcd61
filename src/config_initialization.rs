//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use crate::adapters::toml_config::{Settings, TomlConfigAdapter, DEFAULT_CONFIG_FILE};
use crate::cli::{Cli, Commands};
use crate::domain::model::ExitStatusPolicy;
use crate::error::{ClipCutError, ClipCutResult};
use crate::utils::logging::LogFormat;

/// Resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach this function through clap's `env` support, so
/// they already sit in the same `Cli` fields as their flags.
pub fn initialize_configuration(cli: &Cli) -> ClipCutResult<Settings> {
    let mut settings = match config_file_path(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE)) {
        Some(path) => TomlConfigAdapter::load(&path)?,
        None => Settings::default(),
    };

    apply_cli_overrides(&mut settings, cli)?;
    settings.validate()?;
    Ok(settings)
}

/// An explicit path must exist; the default file is optional
fn config_file_path(explicit: Option<&Path>, default: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if default.is_file() => Some(default.to_path_buf()),
        None => None,
    }
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) -> ClipCutResult<()> {
    if let Some(binary) = &cli.ffmpeg {
        settings.executables = settings.executables.clone().with_binary_for_all(binary);
    }
    if let Some(level) = &cli.log_level {
        settings.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        settings.logging.format = LogFormat::parse(format)?;
    }

    if let Commands::Cut(args) = &cli.command {
        if args.check_exit_status {
            settings.cut.exit_status = ExitStatusPolicy::Inspect;
        }
        if let Some(max) = args.max_concurrent {
            if max == 0 {
                return Err(ClipCutError::ConfigError {
                    message: "--max-concurrent must be at least 1".to_string(),
                });
            }
            settings.cut.max_concurrent = max;
        }
    }

    Ok(())
}
