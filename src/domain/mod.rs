mod identifier;
mod range;

pub use identifier::Identifier;
pub use range::NumberRange;
