use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not install logger: {0}")]
    Init(String),
}

/// Build the event filter: `RUST_LOG` when set, else the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::Open {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Install the global subscriber writing to the log file. The terminal is
/// owned by the TUI, so without a file nothing is logged. Returns whether a
/// subscriber was installed.
pub fn init_logging(config: &LogConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;
    let filter = build_filter(&config.level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
