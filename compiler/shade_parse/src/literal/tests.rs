use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_parse_int_radixes() {
    assert_eq!(parse_int("42"), Ok(42));
    assert_eq!(parse_int("0"), Ok(0));
    assert_eq!(parse_int("0x1F"), Ok(31));
    assert_eq!(parse_int("0XfF"), Ok(255));
    assert_eq!(parse_int("017"), Ok(15));
    assert_eq!(parse_int("7u"), Ok(7));
}

#[test]
fn test_parse_int_too_large() {
    assert_eq!(parse_int("2147483647"), Ok(2_147_483_647));
    assert_eq!(parse_int("2147483648"), Err(LiteralError::TooLarge));
    assert_eq!(parse_int("0xFFFFFFFF"), Err(LiteralError::TooLarge));
    assert_eq!(parse_int("4294967295u"), Ok(4_294_967_295));
    assert_eq!(parse_int("4294967296u"), Err(LiteralError::TooLarge));
    assert_eq!(
        parse_int("0xFFFFFFFFFFFFFFFFFF"),
        Err(LiteralError::TooLarge)
    );
}

#[test]
fn test_unsigned_suffix() {
    assert!(is_unsigned("7u"));
    assert!(is_unsigned("0xFFU"));
    assert!(!is_unsigned("7"));
}

#[test]
fn test_parse_int_malformed() {
    assert_eq!(parse_int("0x"), Err(LiteralError::Malformed));
    assert_eq!(parse_int("09"), Err(LiteralError::Malformed));
}

#[test]
fn test_parse_float_forms() {
    assert_eq!(parse_float("1."), Ok(1.0));
    assert_eq!(parse_float(".5"), Ok(0.5));
    assert_eq!(parse_float("1e3"), Ok(1000.0));
    assert_eq!(parse_float("2.5f"), Ok(2.5));
}

#[test]
fn test_parse_float_too_large() {
    assert_eq!(parse_float("1e999"), Err(LiteralError::TooLarge));
}
