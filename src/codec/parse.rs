//! Token to scalar conversion.

use num_traits::AsPrimitive;

use crate::base::Base;
use crate::error::ScalarError;
use crate::kind::ScalarKind;
use crate::scalar::{RawScalar, ScalarValue};

/// Parses `token` using the kind and base of `target` and stores the result.
///
/// The parsed number is widened to 64 bits and then truncated to the target
/// width, so `"300"` parsed as an unsigned 8-bit value stores `44`. Numbers
/// that do not fit 64 bits are malformed.
///
/// # Errors
/// Returns [`ScalarError::TypeMismatch`] for a signed kind with a non-decimal
/// base and [`ScalarError::MalformedInput`] when the token is not a numeral in
/// the base's radix. `target` is left unchanged on error.
pub fn parse_token(token: &str, target: &mut ScalarValue) -> Result<(), ScalarError> {
    let raw = parse_raw(token, target.kind(), target.base())?;
    target.replace_raw(raw);
    Ok(())
}

/// Parses `token` into a new scalar of `kind` represented in `base`.
///
/// # Errors
/// Same conditions as [`parse_token`].
pub fn parse_scalar(token: &str, kind: ScalarKind, base: Base) -> Result<ScalarValue, ScalarError> {
    let mut value = ScalarValue::new(kind, base);
    parse_token(token, &mut value)?;
    Ok(value)
}

fn parse_raw(token: &str, kind: ScalarKind, base: Base) -> Result<RawScalar, ScalarError> {
    ScalarError::check_representable(kind, base)?;
    let digits = token.trim();
    let bits = if kind.is_signed() {
        parse_signed_decimal(digits)
    } else {
        parse_unsigned(digits, base.radix())
    };
    bits.map(|bits| RawScalar::from_bits(kind, bits))
        .ok_or_else(|| {
            log::debug!("rejected token {token:?} for {kind} in {base} base");
            ScalarError::malformed(token, kind, base)
        })
}

// `from_str_radix` tolerates a leading '+', which unsigned input must not carry.
fn parse_unsigned(digits: &str, radix: u32) -> Option<u64> {
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn parse_signed_decimal(digits: &str) -> Option<u64> {
    digits
        .parse::<i64>()
        .ok()
        .map(<i64 as AsPrimitive<u64>>::as_)
}
