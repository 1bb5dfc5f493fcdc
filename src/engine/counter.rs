use std::cmp::Ordering;

use tracing::{debug, trace};

use super::next_valid;
use crate::domain::{Identifier, NumberRange};
use crate::error::RangeError;
use crate::utils::numeric_value;

/// Number of Luhn-valid identifiers in the inclusive range `start..=end`.
///
/// Jumps from one valid identifier to the next instead of testing every
/// integer in between.
pub fn count_range(start: &str, end: &str) -> Result<u64, RangeError> {
    let range = NumberRange::parse(start, end)?;
    Ok(count_valid_in(&range))
}

#[must_use]
pub fn count_valid_in(range: &NumberRange) -> u64 {
    let end = range.end();
    let mut current = range.start().clone();

    if !current.is_valid() {
        current = next_valid(&current);
        if current.cmp_numeric(end) != Ordering::Less {
            trace!(first = %current, %end, "first valid identifier is not below range end");
            return u64::from(end.is_valid());
        }
    }

    let budget = iteration_budget(&current, end);
    debug!(start = %range.start(), first = %current, %end, budget, "counting range");

    let mut count: u64 = 1;
    let mut steps: u128 = 0;
    while steps < budget {
        current = next_valid(&current);
        if current.cmp_numeric(end) == Ordering::Greater {
            break;
        }
        count += 1;
        steps += 1;
    }

    debug!(count, steps, "range counted");
    count
}

/// One valid identifier per ten consecutive integers sharing a prefix, so
/// `ceil((end - current) / 10)` further jumps cover the range. Saturates
/// when either side does not fit in a `u128`.
fn iteration_budget(current: &Identifier, end: &Identifier) -> u128 {
    match (numeric_value(current.as_str()), numeric_value(end.as_str())) {
        (Some(current), Some(end)) => end.saturating_sub(current).div_ceil(10),
        _ => u128::MAX,
    }
}
