use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidNumberError;
use crate::utils::{cmp_numeric, luhn_checksum, normalize, validate_digits};

/// A normalized, digit-only identifier such as a card number.
///
/// Leading zeros are kept: `"0042"` and `"42"` are different identifiers
/// that share a numeric value. Use [`Identifier::cmp_numeric`] to order by
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Strips separators from `raw` and checks that only digits remain.
    pub fn parse(raw: &str) -> Result<Self, InvalidNumberError> {
        let normalized = normalize(raw);
        validate_digits(&normalized).map_err(|_| InvalidNumberError::new(raw))?;
        Ok(Self(normalized))
    }

    /// Caller guarantees `digits` is non-empty and all `0-9`.
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(validate_digits(&digits).is_ok());
        Self(digits)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn checksum(&self) -> u8 {
        luhn_checksum(&self.0)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checksum() == 0
    }

    /// Every digit but the last, i.e. the identifier without its check digit.
    #[must_use]
    pub fn partial(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// The final digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }

    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        cmp_numeric(&self.0, &other.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = InvalidNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
