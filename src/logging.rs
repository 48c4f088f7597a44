//! Logging setup
//!
//! Every run logs to the console (stderr) and appends to a log file in the
//! working directory. The subscriber is installed for the lifetime of the
//! returned guard instead of as a process-wide global.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

use crate::error::LoggingError;

/// Name of the log file, appended to across runs.
pub const LOG_FILE_NAME: &str = "file_merger.log";

/// Environment variable overriding the level filter.
pub const LOG_ENV_VAR: &str = "FILE_MERGER_LOG";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Logging configuration, built once by the entry point.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level filter: trace, debug, info, warn, error, off
    pub level: String,
    /// Log file path
    pub file: PathBuf,
    /// Colored console output
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from(LOG_FILE_NAME),
            color: should_use_color(),
        }
    }
}

/// Install the console and file subscriber for as long as the guard lives.
pub fn init_logging(config: &LoggingConfig) -> Result<DefaultGuard, LoggingError> {
    let filter = build_env_filter(config)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|source| LoggingError::File {
            path: config.file.clone(),
            source,
        })?;

    let subscriber = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        );

    Ok(tracing::subscriber::set_default(subscriber))
}

/// Build the level filter, letting `FILE_MERGER_LOG` take precedence.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::Directive(e.to_string()))
}

/// Colors only when stderr is a terminal and `NO_COLOR` is unset.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stderr().is_terminal()
}
