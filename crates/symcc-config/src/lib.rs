//! SymCC runtime configuration loading and validation.
//!
//! This crate provides:
//! - The [`Config`] record the runtime consults on every traced operation
//! - Parsers for flag, offset-list and threshold variables
//! - The environment loader (`SYMCC_*` variables → [`Config`])
//! - Export of a config back to environment variables for spawned targets
//! - Config snapshots for run diagnostics

pub mod config;
pub mod env;
pub mod error;
pub mod loader;
mod number;
pub mod parse;
pub mod snapshot;
pub mod vars;

pub use config::{Config, DEFAULT_GC_THRESHOLD};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{ConfigError, ParseError, Result};
pub use loader::{load_config, load_from_process_env, ConfigLoader};
pub use parse::{parse_flag, parse_gc_threshold, parse_offset_list};
pub use snapshot::{ConfigSnapshot, SnapshotError};
