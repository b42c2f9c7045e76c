//! Exit codes for processes hosting the runtime.
//!
//! A host that fails to start terminates before any instrumentation runs;
//! the exit code tells a driving fuzzer why without parsing stderr.

use symcc_config::ConfigError;

/// Exit codes for host startup outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Started normally
    Clean = 0,

    /// Invalid flag value in the environment
    InvalidFlag = 10,

    /// Selective symbolization requested without usable offsets
    NoValidOffsets = 11,

    /// Numeric variable is not a number
    InvalidNumber = 12,

    /// Numeric variable does not fit
    NumberOutOfRange = 13,

    /// Selective mode and offsets disagree
    InconsistentSelection = 14,

    /// Logging could not be set up
    LoggingError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Configuration problems occupy 10..20.
    pub fn is_config_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidFlagValue { .. } => ExitCode::InvalidFlag,
            ConfigError::NoValidOffsets { .. } => ExitCode::NoValidOffsets,
            ConfigError::InvalidNumericFormat { .. } => ExitCode::InvalidNumber,
            ConfigError::NumericOutOfRange { .. } => ExitCode::NumberOutOfRange,
            ConfigError::InconsistentSelection { .. } => ExitCode::InconsistentSelection,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // All codes fit in u8.
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_codes_match_error_codes() {
        let errors = [
            ConfigError::InvalidFlagValue {
                variable: "SYMCC_NO_SYMBOLIC_INPUT",
                value: "x".to_string(),
            },
            ConfigError::NoValidOffsets {
                raw: "x".to_string(),
            },
            ConfigError::InvalidNumericFormat {
                variable: "SYMCC_GC_THRESHOLD",
                raw: "x".to_string(),
            },
            ConfigError::NumericOutOfRange {
                variable: "SYMCC_GC_THRESHOLD",
                raw: "x".to_string(),
                max: u64::MAX,
            },
            ConfigError::InconsistentSelection {
                enabled: true,
                offsets: 0,
            },
        ];
        for err in &errors {
            let code = ExitCode::from(err);
            assert!(code.is_config_error());
            assert_eq!(code.as_i32() as u32, err.code());
        }
    }

    #[test]
    fn clean_is_success() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::Clean.is_config_error());
        assert!(!ExitCode::LoggingError.is_success());
        assert!(!ExitCode::LoggingError.is_config_error());
        assert_eq!(i32::from(ExitCode::LoggingError), 20);
    }
}
