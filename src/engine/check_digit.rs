use crate::domain::Identifier;
use crate::error::InvalidNumberError;
use crate::utils::luhn_checksum;

/// Check digit for a partial identifier (everything but the final digit).
///
/// The returned `d` is the unique digit for which `partial + d` passes the
/// Luhn check.
pub fn generate_check_digit(partial: &str) -> Result<u8, InvalidNumberError> {
    let partial = Identifier::parse(partial)?;
    Ok(check_digit_for(partial.as_str()))
}

/// Expects `partial` to be digits only. An empty partial yields 0.
pub(crate) fn check_digit_for(partial: &str) -> u8 {
    let mut with_placeholder = String::with_capacity(partial.len() + 1);
    with_placeholder.push_str(partial);
    with_placeholder.push('0');

    match luhn_checksum(&with_placeholder) {
        0 => 0,
        r => 10 - r,
    }
}

/// `partial` followed by its check digit.
#[must_use]
pub fn complete_identifier(partial: &Identifier) -> Identifier {
    complete(partial.as_str())
}

/// Appends the matching check digit to `partial`.
pub(crate) fn complete(partial: &str) -> Identifier {
    let digit = check_digit_for(partial);
    Identifier::from_digits(format!("{partial}{digit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_check_digits() {
        assert_eq!(generate_check_digit("7992739871").unwrap(), 3);
        assert_eq!(generate_check_digit("411111111111111").unwrap(), 1);
        assert_eq!(generate_check_digit("453201511283036").unwrap(), 6);
    }

    #[test]
    fn test_check_digit_zero_case() {
        // "10" + 9 is valid, "0" + 0 is valid
        assert_eq!(generate_check_digit("0").unwrap(), 0);
        assert_eq!(generate_check_digit("10").unwrap(), 9);
    }

    #[test]
    fn test_generated_digit_completes_valid_number() {
        for partial in ["1", "12", "123", "98765", "4532 0151 1283 036"] {
            let digit = generate_check_digit(partial).unwrap();
            let full = format!("{partial}{digit}");
            assert!(
                Identifier::parse(&full).unwrap().is_valid(),
                "{full} should be valid"
            );
        }
    }

    #[test]
    fn test_malformed_partial_rejected() {
        assert!(generate_check_digit("12a3").is_err());
        assert!(generate_check_digit("").is_err());
        assert!(generate_check_digit("--").is_err());
    }

    #[test]
    fn test_complete_identifier_from_parsed_partial() {
        let partial = Identifier::parse("4532 0151 1283 036").unwrap();
        let full = complete_identifier(&partial);
        assert_eq!(full.as_str(), "4532015112830366");
        assert_eq!(full.check_digit(), generate_check_digit("453201511283036").unwrap());
        assert_eq!(full.partial(), partial.as_str());
        assert!(full.is_valid());
    }

    #[test]
    fn test_complete_appends_digit() {
        assert_eq!(complete("1").as_str(), "18");
        assert_eq!(complete("").as_str(), "0");
    }
}
