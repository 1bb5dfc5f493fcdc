use thiserror::Error;

/// Input that is empty or holds something other than decimal digits once
/// separators are stripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid number: expected decimal digits only")]
pub struct InvalidNumberError {
    input: String,
}

impl InvalidNumberError {
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The raw input as the caller supplied it.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range endpoint: {0}")]
    InvalidNumber(#[from] InvalidNumberError),

    #[error("Range start {start} must be less than range end {end}")]
    InvalidOrder { start: String, end: String },
}

#[derive(Error, Debug)]
pub enum LuhnixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LuhnixError>;
