//! Error types for configuration loading.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure of a single value parser, before the loader knows which
/// variable the value came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown flag value {0}")]
    InvalidFlag(String),

    #[error("can't convert {0} to an integer")]
    InvalidNumber(String),

    #[error("{raw} exceeds the maximum of {max}")]
    OutOfRange { raw: String, max: u64 },
}

/// Errors raised while populating a [`Config`](crate::Config).
///
/// Every variant carries the offending raw input so that a fatal startup
/// report is enough to fix the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{variable}: unknown flag value {value}")]
    InvalidFlagValue {
        variable: &'static str,
        value: String,
    },

    #[error(
        "selective symbolization was enabled, but no valid offsets specified \
         (original parameter: {raw})"
    )]
    NoValidOffsets { raw: String },

    #[error("{variable}: can't convert {raw} to an integer")]
    InvalidNumericFormat { variable: &'static str, raw: String },

    #[error("{variable}: value {raw} out of range, must be between 0 and {max}")]
    NumericOutOfRange {
        variable: &'static str,
        raw: String,
        max: u64,
    },

    #[error(
        "inconsistent selection: selective_symbolization_enabled={enabled} with {offsets} \
         offsets (offsets require selective mode and selective mode requires offsets)"
    )]
    InconsistentSelection { enabled: bool, offsets: usize },
}

impl ConfigError {
    /// Attach the variable name to a parser failure.
    pub fn from_parse(variable: &'static str, err: ParseError) -> Self {
        match err {
            ParseError::InvalidFlag(value) => ConfigError::InvalidFlagValue { variable, value },
            ParseError::InvalidNumber(raw) => ConfigError::InvalidNumericFormat { variable, raw },
            ParseError::OutOfRange { raw, max } => ConfigError::NumericOutOfRange {
                variable,
                raw,
                max,
            },
        }
    }

    /// Stable numeric code for this error, used in fatal startup reports.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::InvalidFlagValue { .. } => 10,
            ConfigError::NoValidOffsets { .. } => 11,
            ConfigError::InvalidNumericFormat { .. } => 12,
            ConfigError::NumericOutOfRange { .. } => 13,
            ConfigError::InconsistentSelection { .. } => 14,
        }
    }

    /// Name of the environment variable that failed to load.
    pub fn variable(&self) -> &'static str {
        match self {
            ConfigError::InvalidFlagValue { variable, .. }
            | ConfigError::InvalidNumericFormat { variable, .. }
            | ConfigError::NumericOutOfRange { variable, .. } => *variable,
            ConfigError::NoValidOffsets { .. } | ConfigError::InconsistentSelection { .. } => {
                crate::vars::SELECTIVE_INPUT
            }
        }
    }
}
