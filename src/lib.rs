//! Luhn checksum validation, check-digit generation and counting of valid
//! identifiers in a numeric range.
//!
//! Inputs may carry separators such as spaces or dashes; they are dropped
//! before validation. Anything else that is not a decimal digit is rejected.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod utils;

pub use config::LuhnixConfig;
pub use domain::{Identifier, NumberRange};
pub use engine::{
    complete_identifier, count_range, count_range_exhaustive, count_valid_in, generate_check_digit,
    is_valid_luhn, next_valid, ValidAfter,
};
pub use error::{InvalidNumberError, LuhnixError, RangeError, Result as LuhnixResult};
pub use output::OutputFormat;
pub use utils::{luhn_checksum, normalize, validate_digits};
