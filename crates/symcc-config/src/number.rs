//! Decimal token scanning shared by the offset-list and threshold parsers.
//!
//! Mirrors stream/`strtoul` extraction: leading whitespace is skipped, an
//! optional `+` is accepted, and the longest run of digits is consumed.
//! A `-` sign is never accepted since every value here is non-negative.

/// Outcome of scanning one token from the front of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan<'a> {
    /// No digits at the scan position.
    NoDigits,
    /// Digits were present but the value does not fit in `u64`.
    Overflow { rest: &'a str },
    /// A value, and the input remaining after its last digit.
    Value { value: u64, rest: &'a str },
}

// C `isspace` in the "C" locale, which includes vertical tab.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub(crate) fn scan_unsigned(input: &str) -> Scan<'_> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && is_c_space(bytes[pos]) {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'+' {
        pos += 1;
    }

    let digits_start = pos;
    let mut value: Option<u64> = Some(0);
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = u64::from(bytes[pos] - b'0');
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(digit));
        pos += 1;
    }

    if pos == digits_start {
        return Scan::NoDigits;
    }
    // Digits are ASCII, so `pos` is on a char boundary.
    let rest = &input[pos..];
    match value {
        Some(value) => Scan::Value { value, rest },
        None => Scan::Overflow { rest },
    }
}
