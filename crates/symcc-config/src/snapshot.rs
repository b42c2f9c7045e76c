//! Config snapshots for diagnosing a tracing run.
//!
//! A snapshot records the effective configuration together with the
//! variables that were actually set, so a run can be reproduced from the
//! output directory alone.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::loader::ConfigLoader;

/// Errors from snapshot operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Effective configuration of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub schema_version: String,

    pub captured_at: DateTime<Utc>,

    /// Recognized variables that were set, in loader order.
    #[serde(default)]
    pub variables_set: Vec<String>,

    pub config: Config,
}

impl ConfigSnapshot {
    pub const SCHEMA_VERSION: &'static str = "1.0.0";

    /// Wrap an already loaded config.
    pub fn new(config: Config, variables_set: Vec<String>) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION.to_string(),
            captured_at: Utc::now(),
            variables_set,
            config,
        }
    }

    /// Load a config from `env` and record which variables contributed.
    pub fn capture<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let (config, present) = ConfigLoader::new(env).load_recorded()?;
        let variables_set = present.into_iter().map(str::to_string).collect();
        Ok(Self::new(config, variables_set))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, checking its version and config invariants.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: ConfigSnapshot = serde_json::from_str(json)?;
        if snapshot.schema_version != Self::SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.schema_version));
        }
        snapshot.config.validate()?;
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SnapshotError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "wrote config snapshot");
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use tempfile::TempDir;

    #[test]
    fn capture_lists_present_variables() {
        let env = MapEnv::new()
            .with("SYMCC_OUTPUT_DIR", "/out")
            .with("SYMCC_SELECTIVE_INPUT", "3");
        let snapshot = ConfigSnapshot::capture(&env).unwrap();
        assert_eq!(
            snapshot.variables_set,
            vec!["SYMCC_SELECTIVE_INPUT", "SYMCC_OUTPUT_DIR"]
        );
        assert_eq!(snapshot.config.output_dir.as_deref(), Some("/out"));
        assert_eq!(snapshot.schema_version, "1.0.0");
    }

    #[test]
    fn capture_propagates_load_errors() {
        let env = MapEnv::new().with("SYMCC_GC_THRESHOLD", "x");
        assert!(ConfigSnapshot::capture(&env).is_err());
    }

    #[test]
    fn write_and_read_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let snapshot = ConfigSnapshot::new(Config::default(), Vec::new());

        snapshot.write_to(&path).unwrap();
        let back = ConfigSnapshot::read_from(&path).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut snapshot = ConfigSnapshot::new(Config::default(), Vec::new());
        snapshot.schema_version = "9.0.0".to_string();
        let json = snapshot.to_json().unwrap();
        assert!(matches!(
            ConfigSnapshot::from_json(&json),
            Err(SnapshotError::UnsupportedVersion(v)) if v == "9.0.0"
        ));
    }

    #[test]
    fn rejects_enabled_empty_selection() {
        let config = Config {
            selective_symbolization_enabled: true,
            ..Config::default()
        };
        let json = ConfigSnapshot::new(config, Vec::new()).to_json().unwrap();
        assert!(matches!(
            ConfigSnapshot::from_json(&json),
            Err(SnapshotError::Invalid(ConfigError::InconsistentSelection {
                enabled: true,
                offsets: 0
            }))
        ));
    }

    #[test]
    fn rejects_offsets_without_selective_mode() {
        let config = Config {
            offsets_to_symbolize: [3].into_iter().collect(),
            ..Config::default()
        };
        let json = ConfigSnapshot::new(config, Vec::new()).to_json().unwrap();
        assert!(matches!(
            ConfigSnapshot::from_json(&json),
            Err(SnapshotError::Invalid(ConfigError::InconsistentSelection {
                enabled: false,
                offsets: 1
            }))
        ));
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = ConfigSnapshot::read_from(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }
}
