//! Logging bootstrap

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ClipCutError, ClipCutResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Pretty
    }
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(format_str: &str) -> ClipCutResult<Self> {
        match format_str.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ClipCutError::ConfigError {
                message: format!(
                    "Invalid log format: {}. Valid formats: pretty, compact, json",
                    format_str
                ),
            }),
        }
    }
}

/// Parse a configured level or filter directive, ignoring `RUST_LOG`
pub fn validate_level(level: &str) -> ClipCutResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| ClipCutError::ConfigError {
        message: format!("Invalid log level '{}': {}", level, e),
    })
}

/// Build the filter. `RUST_LOG` takes precedence over the configured level.
pub fn build_filter(level: &str) -> ClipCutResult<EnvFilter> {
    let configured = validate_level(level)?;
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(EnvFilter::from_default_env());
    }
    Ok(configured)
}

/// Install the global subscriber. Logs go to stderr so stdout stays machine-readable.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init_logging(level: &str, format: LogFormat) -> ClipCutResult<()> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }

    Ok(())
}
