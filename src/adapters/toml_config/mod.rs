// TOML config adapter - Configuration management using TOML files

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::exec_process::ExecutableTable;
use crate::domain::model::ExitStatusPolicy;
use crate::error::{ClipCutError, ClipCutResult};
use crate::utils::logging::{validate_level, LogFormat};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "clipcut.toml";

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Program alias -> binary
    pub executables: ExecutableTable,
    pub cut: CutSettings,
    pub logging: LoggingSettings,
}

/// Cut pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CutSettings {
    pub exit_status: ExitStatusPolicy,
    /// Upper bound on simultaneously running transcoder processes
    pub max_concurrent: usize,
}

impl Default for CutSettings {
    fn default() -> Self {
        Self {
            exit_status: ExitStatusPolicy::default(),
            max_concurrent: num_cpus::get(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Validate configuration
    pub fn validate(&self) -> ClipCutResult<()> {
        if self.cut.max_concurrent == 0 {
            return Err(ClipCutError::ConfigError {
                message: "cut.max_concurrent must be at least 1".to_string(),
            });
        }

        validate_level(&self.logging.level)?;
        Ok(())
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse and validate settings from TOML text
    pub fn parse(toml_content: &str) -> ClipCutResult<Settings> {
        let settings: Settings = toml::from_str(toml_content).map_err(|e| ClipCutError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> ClipCutResult<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| ClipCutError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::parse(&content)
    }

    /// Serialize settings back to TOML
    pub fn to_toml(settings: &Settings) -> ClipCutResult<String> {
        toml::to_string_pretty(settings).map_err(|e| ClipCutError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = TomlConfigAdapter::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.cut.exit_status, ExitStatusPolicy::Ignore);
        assert!(settings.cut.max_concurrent >= 1);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let settings = TomlConfigAdapter::parse(
            r#"
            [executables]
            ffmpeg = "/usr/bin/ffmpeg"
            ffmpeg-full-quality = "/opt/ffmpeg-full/bin/ffmpeg"

            [cut]
            exit_status = "inspect"
            max_concurrent = 2

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.executables.resolve("ffmpeg"), "/usr/bin/ffmpeg");
        assert_eq!(
            settings.executables.resolve("ffmpeg-full-quality"),
            "/opt/ffmpeg-full/bin/ffmpeg"
        );
        assert_eq!(settings.cut.exit_status, ExitStatusPolicy::Inspect);
        assert_eq!(settings.cut.max_concurrent, 2);
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_executables_keep_builtin_default() {
        let settings = TomlConfigAdapter::parse("[executables]\nffmpeg = \"/x/ffmpeg\"\n").unwrap();
        assert_eq!(settings.executables.resolve("ffmpeg-full-quality"), "ffmpeg");
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = TomlConfigAdapter::parse("[cut]\nmax_concurrent = 0\n").unwrap_err();
        assert!(matches!(err, ClipCutError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let err = TomlConfigAdapter::parse("[logging]\nlevel = \"info=verbose\"\n").unwrap_err();
        assert!(matches!(err, ClipCutError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(TomlConfigAdapter::parse("[cut]\nexit_status = \"maybe\"\n").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(TomlConfigAdapter::parse("[cut]\ncrf = 18\n").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let settings = Settings {
            executables: ExecutableTable::new().with_alias("ffmpeg", "/bin/ffmpeg"),
            ..Settings::default()
        };
        let text = TomlConfigAdapter::to_toml(&settings).unwrap();
        assert_eq!(TomlConfigAdapter::parse(&text).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TomlConfigAdapter::load(Path::new("/nonexistent/clipcut.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
