use std::cmp::Ordering;

use super::complete;
use crate::domain::Identifier;
use crate::utils::increment;

/// Smallest Luhn-valid identifier numerically greater than `current`.
///
/// Completes the partial prefix of `current` with its check digit. When
/// that does not move forward, the prefix is incremented as an integer
/// first, so the result may be longer (`"99"` -> `"109"`) or lose leading
/// zeros (`"0995"` -> `"1008"`). A single-digit `current` has an empty
/// prefix, which is read as 0.
#[must_use]
pub fn next_valid(current: &Identifier) -> Identifier {
    let partial = match current.partial() {
        "" => "0",
        p => p,
    };

    let candidate = complete(partial);
    if candidate.cmp_numeric(current) == Ordering::Greater {
        return candidate;
    }

    complete(&increment(partial))
}

/// Endless iterator over the valid identifiers after a starting point.
#[derive(Debug, Clone)]
pub struct ValidAfter {
    current: Identifier,
}

impl ValidAfter {
    #[must_use]
    pub fn new(start: Identifier) -> Self {
        Self { current: start }
    }
}

impl Iterator for ValidAfter {
    type Item = Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = next_valid(&self.current);
        Some(self.current.clone())
    }
}
