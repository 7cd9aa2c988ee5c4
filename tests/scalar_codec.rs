//! Integration tests for the public scalar and codec API.

use rstest::rstest;
use scalario::{
    Base, ScalarError, ScalarKind, ScalarValue, TypeMismatch, format_value, parse_scalar,
    parse_token,
};

#[test]
fn binary_u8_is_padded_to_eight_digits() {
    let value = ScalarValue::with_value(5_u8, Base::Binary);
    assert_eq!(format_value(&value).as_deref(), Ok("00000101"));
}

#[test]
fn hex_u16_is_padded_to_four_digits() {
    let value = ScalarValue::with_value(255_u16, Base::Hexadecimal);
    assert_eq!(format_value(&value).as_deref(), Ok("00ff"));
}

#[test]
fn decimal_i32_has_no_padding() {
    let value = ScalarValue::with_value(-7_i32, Base::Decimal);
    assert_eq!(format_value(&value).as_deref(), Ok("-7"));
}

#[test]
fn malformed_decimal_leaves_target_untouched() {
    let mut target = ScalarValue::with_value(1234_u32, Base::Decimal);
    let err = parse_token("12a", &mut target);
    assert!(matches!(err, Err(ScalarError::MalformedInput { .. })));
    assert_eq!(target.get::<u32>(), Ok(1234));
}

#[test]
fn narrow_assignment_truncates() {
    let mut value = ScalarValue::new(ScalarKind::U8, Base::Decimal);
    value.set_truncating(300_u32);
    assert_eq!(value.kind(), ScalarKind::U8);
    assert_eq!(value.get::<u8>(), Ok(44));
}

#[test]
fn assignment_changes_kind() {
    let mut value = ScalarValue::default();
    value.set_from(300_u32);
    assert_eq!(value.kind(), ScalarKind::U32);
    assert_eq!(value.as_unsigned(), Ok(300));
    assert!(matches!(
        value.as_signed(),
        Err(ScalarError::TypeMismatch(TypeMismatch::Accessor { .. }))
    ));
}

#[rstest]
#[case(ScalarKind::I8)]
#[case(ScalarKind::I16)]
#[case(ScalarKind::I32)]
#[case(ScalarKind::I64)]
fn signed_kinds_only_parse_in_decimal(#[case] kind: ScalarKind) {
    for base in [Base::Binary, Base::Octal, Base::Hexadecimal] {
        assert_eq!(
            parse_scalar("1", kind, base),
            Err(ScalarError::TypeMismatch(TypeMismatch::SignedNonDecimal {
                kind,
                base
            }))
        );
    }
    assert!(parse_scalar("-1", kind, Base::Decimal).is_ok());
}

#[rstest]
#[case("u32", "hex", "0000002a")]
#[case("uint8_t", "bin", "00101010")]
#[case("u16", "octal", "000052")]
#[case("i64", "decimal", "42")]
fn kinds_and_bases_by_name(#[case] kind: &str, #[case] base: &str, #[case] expected: &str) {
    let kind: ScalarKind = kind
        .parse()
        .unwrap_or_else(|e| panic!("kind {kind:?}: {e}"));
    let base: Base = base
        .parse()
        .unwrap_or_else(|e| panic!("base {base:?}: {e}"));
    let mut value = ScalarValue::new(kind, base);
    value.set_truncating(42_u8);
    assert_eq!(format_value(&value).as_deref(), Ok(expected));
}

#[test]
fn floating_point_kinds_are_unsupported() {
    for name in ["f32", "f64", "float", "double"] {
        assert_eq!(
            name.parse::<ScalarKind>(),
            Err(ScalarError::UnsupportedKind {
                requested: name.to_string()
            })
        );
    }
}
