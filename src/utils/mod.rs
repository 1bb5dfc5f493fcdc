mod digits;
mod luhn;
mod strings;

pub use digits::{cmp_numeric, increment, numeric_value, trim_leading_zeros};
pub use luhn::checksum as luhn_checksum;
pub use strings::{normalize, validate_digits};
