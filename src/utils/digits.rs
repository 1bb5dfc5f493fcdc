//! Decimal arithmetic on digit strings of any length.

use std::cmp::Ordering;

/// Strips leading zeros, keeping a single `0` for an all-zero or empty input.
#[must_use]
pub fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Orders two digit strings by the integer they denote.
#[must_use]
pub fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Integer value, or `None` when it does not fit in a `u128`.
#[must_use]
pub fn numeric_value(digits: &str) -> Option<u128> {
    trim_leading_zeros(digits).parse().ok()
}

/// Adds one, as integer arithmetic would: leading zeros are dropped and a
/// carry out of the top digit grows the result (`"099"` -> `"100"`,
/// `"99"` -> `"100"`).
#[must_use]
pub fn increment(digits: &str) -> String {
    let mut bytes: Vec<u8> = trim_leading_zeros(digits).bytes().collect();

    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }

    bytes.into_iter().map(char::from).collect()
}
