//! Startup support for processes that host the SymCC runtime.
//!
//! This crate provides:
//! - One-shot initialization into a shared read-only [`SharedConfig`]
//! - Diagnostic logging to the configured log file
//! - Fatal startup reporting with stable exit codes

pub mod exit_codes;
pub mod logging;
pub mod shared;
pub mod startup;

pub use exit_codes::ExitCode;
pub use logging::{
    default_filter, init_logging, init_logging_with_filter, LogFormat, LoggingError,
};
pub use shared::SharedConfig;
pub use startup::{
    initialize, initialize_from_process_env, report_fatal, start, start_with_filter, StartupError,
};
