use crate::error::InvalidNumberError;

/// Drops every character that is not an ASCII letter or digit, then
/// lowercases what is left. Never fails.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Rejects empty strings and anything outside `0-9`.
pub fn validate_digits(s: &str) -> Result<(), InvalidNumberError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidNumberError::new(s));
    }
    Ok(())
}
