use crate::domain::Identifier;
use crate::error::InvalidNumberError;

/// Whether `number` passes the Luhn check. Separators such as spaces and
/// dashes are ignored; anything else that is not a digit is an error.
pub fn is_valid_luhn(number: &str) -> Result<bool, InvalidNumberError> {
    Ok(Identifier::parse(number)?.is_valid())
}
