//! Value parsers for the recognized environment variables.
//!
//! All string-to-value conversion for the runtime configuration lives here.
//! Each parser is a pure function; the loader attaches variable names to
//! failures.

use std::collections::BTreeSet;

use crate::error::ParseError;
use crate::number::{scan_unsigned, Scan};

/// Parse a boolean flag.
///
/// Matching is ASCII case-insensitive. `1`, `on` and `yes` are true; the
/// empty string, `0`, `off` and `no` are false. Surrounding whitespace is
/// not trimmed, and non-ASCII characters are reported unchanged.
pub fn parse_flag(value: &str) -> Result<bool, ParseError> {
    let value = value.to_ascii_lowercase();
    match value.as_str() {
        "1" | "on" | "yes" => Ok(true),
        "" | "0" | "off" | "no" => Ok(false),
        _ => Err(ParseError::InvalidFlag(value)),
    }
}

/// Parse a list of offsets in the format `1,2,3`.
///
/// Scanning stops at the first position that does not start a number, so
/// `0,1,x` yields `{0, 1}` and `abc` yields the empty set. Rejecting an
/// empty result is left to the caller.
pub fn parse_offset_list(raw: &str) -> BTreeSet<usize> {
    let mut offsets = BTreeSet::new();
    let mut rest = raw;

    while let Scan::Value { value, rest: after } = scan_unsigned(rest) {
        let Ok(offset) = usize::try_from(value) else {
            break;
        };
        offsets.insert(offset);
        rest = after.strip_prefix(',').unwrap_or(after);
    }

    offsets
}

/// Parse the garbage-collection threshold.
///
/// Leading whitespace is skipped and anything after the leading digits is
/// ignored, like `strtoul`.
pub fn parse_gc_threshold(raw: &str) -> Result<u64, ParseError> {
    match scan_unsigned(raw) {
        Scan::Value { value, .. } => Ok(value),
        Scan::Overflow { .. } => Err(ParseError::OutOfRange {
            raw: raw.to_string(),
            max: u64::MAX,
        }),
        Scan::NoDigits => Err(ParseError::InvalidNumber(raw.to_string())),
    }
}
