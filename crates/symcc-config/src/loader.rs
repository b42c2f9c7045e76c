//! Populate a [`Config`] from environment variables.
//!
//! The loader visits every recognized variable once, in a fixed order.
//! Absent variables leave their field untouched. The first invalid value
//! aborts the pass; fields written before it stay written.

use tracing::{debug, trace};

use crate::config::Config;
use crate::env::{EnvSource, MapEnv, ProcessEnv};
use crate::error::{ConfigError, Result};
use crate::parse::{parse_flag, parse_gc_threshold, parse_offset_list};
use crate::vars;

/// Applies an [`EnvSource`] to a configuration.
pub struct ConfigLoader<'a, E: EnvSource + ?Sized> {
    env: &'a E,
}

impl<'a, E: EnvSource + ?Sized> ConfigLoader<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// Run the initialization pass over `config` in place.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(value) = self.get(vars::NO_SYMBOLIC_INPUT) {
            config.fully_concrete = flag(vars::NO_SYMBOLIC_INPUT, &value)?;
        }

        if let Some(raw) = self.get(vars::SELECTIVE_INPUT) {
            // e.g. SYMCC_SELECTIVE_INPUT=0,1,2 only symbolizes the first 3 input bytes
            let offsets = parse_offset_list(&raw);
            if offsets.is_empty() {
                return Err(ConfigError::NoValidOffsets { raw });
            }
            config.offsets_to_symbolize = offsets;
            config.selective_symbolization_enabled = true;
        }

        if let Some(value) = self.get(vars::OUTPUT_DIR) {
            config.output_dir = Some(value);
        }
        if let Some(value) = self.get(vars::INPUT_FILE) {
            config.input_file = Some(value);
        }
        if let Some(value) = self.get(vars::LOG_FILE) {
            config.log_file = Some(value);
        }

        if let Some(value) = self.get(vars::ENABLE_LINEARIZATION) {
            config.pruning = flag(vars::ENABLE_LINEARIZATION, &value)?;
        }

        if let Some(value) = self.get(vars::AFL_COVERAGE_MAP) {
            config.afl_coverage_map = Some(value);
        }

        if let Some(raw) = self.get(vars::GC_THRESHOLD) {
            config.garbage_collection_threshold = parse_gc_threshold(&raw)
                .map_err(|e| ConfigError::from_parse(vars::GC_THRESHOLD, e))?;
        }

        Ok(())
    }

    /// Build a fresh config from defaults and run the pass.
    pub fn load(&self) -> Result<Config> {
        let mut config = Config::default();
        self.apply(&mut config)?;
        Ok(config)
    }

    /// Build a fresh config and list the recognized variables that were set.
    ///
    /// Each variable is looked up exactly once, so a source that warns on
    /// lookup (see [`ProcessEnv`]) warns once per variable.
    pub fn load_recorded(&self) -> Result<(Config, Vec<&'static str>)> {
        let mut present = Vec::new();
        let mut resolved = MapEnv::new();
        for name in vars::ALL {
            if let Some(value) = self.env.lookup(name) {
                present.push(name);
                resolved.set(name, value);
            }
        }
        let config = ConfigLoader::new(&resolved).load()?;
        Ok((config, present))
    }

    /// Recognized variables that are set in the source.
    pub fn present_variables(&self) -> Vec<&'static str> {
        vars::ALL
            .into_iter()
            .filter(|name| self.env.lookup(name).is_some())
            .collect()
    }

    fn get(&self, name: &'static str) -> Option<String> {
        let value = self.env.lookup(name);
        match &value {
            Some(value) => debug!(variable = name, value = %value, "applying"),
            None => trace!(variable = name, "not set, keeping default"),
        }
        value
    }
}

fn flag(variable: &'static str, value: &str) -> Result<bool> {
    parse_flag(value).map_err(|e| ConfigError::from_parse(variable, e))
}

/// Load a config from defaults plus `env`.
pub fn load_config<E: EnvSource + ?Sized>(env: &E) -> Result<Config> {
    ConfigLoader::new(env).load()
}

/// Load a config from the environment of the current process.
pub fn load_from_process_env() -> Result<Config> {
    load_config(&ProcessEnv)
}
