//! The runtime configuration record.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vars;

/// Default expression count that triggers garbage collection.
pub const DEFAULT_GC_THRESHOLD: u64 = 5_000_000;

/// Configuration consulted by the runtime on every traced operation.
///
/// Built once at startup (see [`load_config`](crate::load_config)) and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Disable symbolic treatment of the input entirely.
    #[serde(default)]
    pub fully_concrete: bool,

    /// Only symbolize the input bytes listed in `offsets_to_symbolize`.
    #[serde(default)]
    pub selective_symbolization_enabled: bool,

    /// Input offsets to symbolize when selective symbolization is enabled.
    #[serde(default)]
    pub offsets_to_symbolize: BTreeSet<usize>,

    /// Directory for generated artifacts.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Concrete input driving execution.
    #[serde(default)]
    pub input_file: Option<String>,

    /// Diagnostic log file.
    #[serde(default)]
    pub log_file: Option<String>,

    /// Enable linearization (search-space pruning).
    #[serde(default)]
    pub pruning: bool,

    /// AFL coverage map shared with a fuzzer.
    #[serde(default)]
    pub afl_coverage_map: Option<String>,

    /// Memory reclamation threshold.
    #[serde(default = "default_gc_threshold")]
    pub garbage_collection_threshold: u64,
}

fn default_gc_threshold() -> u64 {
    DEFAULT_GC_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fully_concrete: false,
            selective_symbolization_enabled: false,
            offsets_to_symbolize: BTreeSet::new(),
            output_dir: None,
            input_file: None,
            log_file: None,
            pruning: false,
            afl_coverage_map: None,
            garbage_collection_threshold: DEFAULT_GC_THRESHOLD,
        }
    }
}

impl Config {
    /// Whether the input byte at `offset` should be treated symbolically.
    pub fn should_symbolize_offset(&self, offset: usize) -> bool {
        if self.fully_concrete {
            return false;
        }
        !self.selective_symbolization_enabled || self.offsets_to_symbolize.contains(&offset)
    }

    /// Check invariants on a config that did not come from the loader,
    /// e.g. one deserialized from a snapshot.
    ///
    /// Selective mode and a non-empty offset set must appear together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selective_symbolization_enabled == self.offsets_to_symbolize.is_empty() {
            return Err(ConfigError::InconsistentSelection {
                enabled: self.selective_symbolization_enabled,
                offsets: self.offsets_to_symbolize.len(),
            });
        }
        Ok(())
    }

    /// Render the non-default fields as `SYMCC_*` variables.
    ///
    /// For a config that passes [`validate`](Self::validate), loading the
    /// returned map yields a config equal to `self`. Drivers rely on this
    /// when spawning instrumented targets.
    pub fn to_env_vars(&self) -> BTreeMap<&'static str, String> {
        let defaults = Config::default();
        let mut env = BTreeMap::new();

        if self.fully_concrete {
            env.insert(vars::NO_SYMBOLIC_INPUT, "1".to_string());
        }
        if self.selective_symbolization_enabled {
            let list: Vec<String> = self
                .offsets_to_symbolize
                .iter()
                .map(|offset| offset.to_string())
                .collect();
            env.insert(vars::SELECTIVE_INPUT, list.join(","));
        }
        let paths = [
            (vars::OUTPUT_DIR, &self.output_dir),
            (vars::INPUT_FILE, &self.input_file),
            (vars::LOG_FILE, &self.log_file),
            (vars::AFL_COVERAGE_MAP, &self.afl_coverage_map),
        ];
        for (name, value) in paths {
            if let Some(value) = value {
                env.insert(name, value.clone());
            }
        }
        if self.pruning {
            env.insert(vars::ENABLE_LINEARIZATION, "1".to_string());
        }
        if self.garbage_collection_threshold != defaults.garbage_collection_threshold {
            env.insert(
                vars::GC_THRESHOLD,
                self.garbage_collection_threshold.to_string(),
            );
        }

        env
    }
}
