use std::cmp::Ordering;

use serde::Serialize;

use super::Identifier;
use crate::error::RangeError;

/// An inclusive interval of identifiers whose start is numerically below
/// its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberRange {
    start: Identifier,
    end: Identifier,
}

impl NumberRange {
    pub fn new(start: Identifier, end: Identifier) -> Result<Self, RangeError> {
        if start.cmp_numeric(&end) != Ordering::Less {
            return Err(RangeError::InvalidOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Normalizes and validates both endpoints before checking their order.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        let start = Identifier::parse(start)?;
        let end = Identifier::parse(end)?;
        Self::new(start, end)
    }

    #[must_use]
    pub fn start(&self) -> &Identifier {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Identifier {
        &self.end
    }

    /// `end - start`, if both endpoints fit in a `u128`.
    #[must_use]
    pub fn span(&self) -> Option<u128> {
        let start = crate::utils::numeric_value(self.start.as_str())?;
        let end = crate::utils::numeric_value(self.end.as_str())?;
        Some(end - start)
    }
}
