//! Read-only handle to the initialized configuration.

use std::ops::Deref;
use std::sync::Arc;

use symcc_config::Config;

/// The process-wide configuration after initialization.
///
/// Only [`initialize`](crate::initialize) creates one, so holding a
/// `SharedConfig` proves the loader already ran. Clones share the same
/// record and can be handed to any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedConfig(Arc<Config>);

impl SharedConfig {
    pub(crate) fn new(config: Config) -> Self {
        Self(Arc::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.0
    }
}

impl Deref for SharedConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.0
    }
}

impl AsRef<Config> for SharedConfig {
    fn as_ref(&self) -> &Config {
        &self.0
    }
}
