use std::cmp::Ordering;

use crate::domain::NumberRange;
use crate::utils::{cmp_numeric, increment, luhn_checksum, trim_leading_zeros};

/// Counts valid identifiers by testing every integer in the range.
///
/// Linear in the width of the range; meant for cross-checking
/// [`count_range`](super::count_range) on small ranges.
#[must_use]
pub fn count_range_exhaustive(range: &NumberRange) -> u64 {
    let end = range.end().as_str();
    let mut current = trim_leading_zeros(range.start().as_str()).to_string();
    let mut count = 0;

    while cmp_numeric(&current, end) != Ordering::Greater {
        if luhn_checksum(&current) == 0 {
            count += 1;
        }
        current = increment(&current);
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhaustive(start: &str, end: &str) -> u64 {
        count_range_exhaustive(&NumberRange::parse(start, end).unwrap())
    }

    #[test]
    fn test_exhaustive_small_ranges() {
        assert_eq!(exhaustive("0", "99"), 10);
        assert_eq!(exhaustive("9", "10"), 0);
        assert_eq!(exhaustive("4111111111111110", "4111111111111120"), 1);
    }

    #[test]
    fn test_exhaustive_ignores_leading_zeros() {
        assert_eq!(exhaustive("0005", "0100"), exhaustive("5", "100"));
    }
}
