//! Names of the environment variables read by the loader.
//!
//! The literal names are shared with the C/C++ runtime and the drivers that
//! spawn instrumented targets, so they must not change.

/// Flag: disable symbolic treatment of the input entirely.
pub const NO_SYMBOLIC_INPUT: &str = "SYMCC_NO_SYMBOLIC_INPUT";

/// Comma-separated input byte offsets to symbolize, e.g. `0,1,2`.
pub const SELECTIVE_INPUT: &str = "SYMCC_SELECTIVE_INPUT";

/// Directory for generated test cases.
pub const OUTPUT_DIR: &str = "SYMCC_OUTPUT_DIR";

/// Concrete input file driving execution.
pub const INPUT_FILE: &str = "SYMCC_INPUT_FILE";

/// Diagnostic log file.
pub const LOG_FILE: &str = "SYMCC_LOG_FILE";

/// Flag: enable linearization (pruning of the search space).
pub const ENABLE_LINEARIZATION: &str = "SYMCC_ENABLE_LINEARIZATION";

/// Path of an AFL coverage map shared with a fuzzer.
pub const AFL_COVERAGE_MAP: &str = "SYMCC_AFL_COVERAGE_MAP";

/// Expression count above which the runtime collects garbage.
pub const GC_THRESHOLD: &str = "SYMCC_GC_THRESHOLD";

/// Every recognized variable, in the order the loader visits them.
pub const ALL: [&str; 8] = [
    NO_SYMBOLIC_INPUT,
    SELECTIVE_INPUT,
    OUTPUT_DIR,
    INPUT_FILE,
    LOG_FILE,
    ENABLE_LINEARIZATION,
    AFL_COVERAGE_MAP,
    GC_THRESHOLD,
];

/// Whether `name` is one of the variables the loader reads.
pub fn is_recognized(name: &str) -> bool {
    ALL.contains(&name)
}
