//! Text codec for scalar values.
//!
//! Parsing turns a whitespace-trimmed token into a [`ScalarValue`] of a
//! requested kind and base; formatting renders a value back to text. Binary,
//! octal and hexadecimal output is zero-padded to the base's print width for
//! the value's kind. Decimal output is never padded.
//!
//! Only unsigned kinds may use a non-decimal base. Signed kinds in binary,
//! octal or hexadecimal are rejected in both directions rather than being
//! reinterpreted as their two's-complement bit pattern.
//!
//! [`ScalarValue`]: crate::ScalarValue

mod format;
mod parse;

pub use format::format_value;
pub use parse::{parse_scalar, parse_token};
