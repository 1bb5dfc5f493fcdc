/// Luhn weighted digit sum modulo 10. Every second digit counting from the
/// rightmost one is doubled; doubled values above 9 have 9 subtracted.
///
/// Expects a string of decimal digits. A result of 0 means the string,
/// read as a complete number including its check digit, is valid.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn checksum(digits: &str) -> u8 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    (sum % 10) as u8
}
