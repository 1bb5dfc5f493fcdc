mod check_digit;
mod counter;
mod next_valid;
mod reference;
mod validity;

pub use check_digit::{complete_identifier, generate_check_digit};
pub use counter::{count_range, count_valid_in};
pub use next_valid::{next_valid, ValidAfter};
pub use reference::count_range_exhaustive;
pub use validity::is_valid_luhn;

pub(crate) use check_digit::complete;
