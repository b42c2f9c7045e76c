//! One-shot runtime initialization.
//!
//! The host calls [`start`] (or [`initialize`] when it manages logging
//! itself) exactly once, before spawning anything that reads the
//! configuration. Failures are fatal: the entry point passes them to
//! [`report_fatal`] and exits with the returned code.

use symcc_config::{load_config, ConfigError, EnvSource, ProcessEnv};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::exit_codes::ExitCode;
use crate::logging::{default_filter, init_logging_with_filter, LogFormat, LoggingError};
use crate::shared::SharedConfig;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),
}

impl StartupError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StartupError::Config(err) => ExitCode::from(err),
            StartupError::Logging(_) => ExitCode::LoggingError,
        }
    }
}

/// Load the configuration from `env` into a shared read-only handle.
pub fn initialize<E: EnvSource + ?Sized>(env: &E) -> Result<SharedConfig, StartupError> {
    let config = load_config(env)?;
    info!(
        fully_concrete = config.fully_concrete,
        selective = config.selective_symbolization_enabled,
        offsets = config.offsets_to_symbolize.len(),
        pruning = config.pruning,
        gc_threshold = config.garbage_collection_threshold,
        "runtime configuration loaded"
    );
    Ok(SharedConfig::new(config))
}

/// [`initialize`] over the environment of the current process.
pub fn initialize_from_process_env() -> Result<SharedConfig, StartupError> {
    initialize(&ProcessEnv)
}

/// Load the configuration, then install logging to its log file.
///
/// Configuration errors surface before any logger exists, so callers must
/// report them through [`report_fatal`], which also writes to stderr.
pub fn start<E: EnvSource + ?Sized>(
    env: &E,
    format: LogFormat,
) -> Result<SharedConfig, StartupError> {
    start_with_filter(env, format, default_filter())
}

/// [`start`] with an explicit log filter instead of `RUST_LOG`.
pub fn start_with_filter<E: EnvSource + ?Sized>(
    env: &E,
    format: LogFormat,
    filter: EnvFilter,
) -> Result<SharedConfig, StartupError> {
    let config = load_config(env)?;
    init_logging_with_filter(&config, format, filter)?;
    info!(
        output_dir = config.output_dir.as_deref().unwrap_or("-"),
        input_file = config.input_file.as_deref().unwrap_or("-"),
        coverage_map = config.afl_coverage_map.as_deref().unwrap_or("-"),
        "runtime started"
    );
    Ok(SharedConfig::new(config))
}

/// Report a startup failure and return the exit code to terminate with.
pub fn report_fatal(err: &StartupError) -> ExitCode {
    let code = err.exit_code();
    error!(code = code.as_i32(), "fatal: {err}");
    eprintln!("symcc: fatal: {err}");
    code
}
