//! Scalar to text conversion.

use crate::base::Base;
use crate::error::ScalarError;
use crate::scalar::ScalarValue;

/// Renders `value` in its base.
///
/// Hexadecimal digits are lowercase and no radix prefix is emitted.
///
/// # Examples
///
/// ```
/// use scalario::{Base, ScalarValue, format_value};
///
/// let value = ScalarValue::with_value(5_u8, Base::Binary);
/// assert_eq!(format_value(&value).as_deref(), Ok("00000101"));
/// ```
///
/// # Errors
/// Returns [`ScalarError::TypeMismatch`] when a signed value uses a
/// non-decimal base.
pub fn format_value(value: &ScalarValue) -> Result<String, ScalarError> {
    let kind = value.kind();
    let base = value.base();
    if let Err(err) = ScalarError::check_representable(kind, base) {
        log::debug!("refusing to format {kind} in {base} base");
        return Err(err);
    }
    let width = base.print_width(kind);
    let bits = value.raw().to_bits();
    let text = match base {
        Base::Binary => format!("{bits:0width$b}"),
        Base::Octal => format!("{bits:0width$o}"),
        Base::Hexadecimal => format!("{bits:0width$x}"),
        Base::Decimal => value.raw().to_string(),
    };
    Ok(text)
}
