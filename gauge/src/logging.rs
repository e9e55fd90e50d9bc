//! Subscriber setup for the `tracing` events emitted by the Gauge crates

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    #[default]
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or `target=level` lists)
    pub level: String,
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level directive \"{directive}\": {reason}")]
    InvalidLevel { directive: String, reason: String },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Build the level filter for `config`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidLevel {
        directive: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Install a global fmt subscriber writing to stderr.
///
/// Only the first successful call in a process takes effect; later calls
/// return [`LoggingError::AlreadyInitialized`].
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    let installed = match config.format {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_writer(io::stderr)
                .json();

            registry.with(json_layer).try_init()
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(true)
                .with_writer(io::stderr);

            registry.with(pretty_layer).try_init()
        }
        LogFormat::Compact => {
            let compact_layer = fmt::layer()
                .compact()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(false)
                .with_writer(io::stderr);

            registry.with(compact_layer).try_init()
        }
    };

    installed.map_err(|_| LoggingError::AlreadyInitialized)?;
    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}
