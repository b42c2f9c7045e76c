//! Diagnostic logging for the host process.
//!
//! Logs go to the configured log file (appending) or to stderr when none is
//! set. Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use symcc_config::Config;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Errors from logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global logger is already installed: {0}")]
    AlreadyInitialized(String),
}

/// The log file named by `config`, if any. An empty path counts as unset.
pub fn log_path(config: &Config) -> Option<&Path> {
    config
        .log_file
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(Path::new)
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Build a subscriber for `config` without installing it.
pub fn build_subscriber(
    config: &Config,
    format: LogFormat,
    filter: EnvFilter,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggingError> {
    let (writer, ansi) = match log_path(config) {
        Some(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Pretty => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .finish(),
        ),
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_target(true)
                .finish(),
        ),
    };
    Ok(subscriber)
}

/// The filter from `RUST_LOG`, or [`DEFAULT_FILTER`].
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for `config`, filtered per `RUST_LOG`.
pub fn init_logging(config: &Config, format: LogFormat) -> Result<(), LoggingError> {
    init_logging_with_filter(config, format, default_filter())
}

/// Install the global subscriber for `config` with an explicit filter.
pub fn init_logging_with_filter(
    config: &Config,
    format: LogFormat,
    filter: EnvFilter,
) -> Result<(), LoggingError> {
    let subscriber = build_subscriber(config, format, filter)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
