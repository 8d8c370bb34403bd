use super::*;
use crate::errors::EvalErrorKind;
use crate::DecodedPattern;
use pretty_assertions::assert_eq;

#[test]
fn test_type_names() {
    let pattern = DecodedPattern::new(0, 1, Value::Unsigned(1)).into_shared();
    let names: Vec<&str> = [
        Value::Unsigned(1),
        Value::Signed(-1),
        Value::Float(1.5),
        Value::Bool(true),
        Value::Char('a'),
        Value::string("s"),
        Value::Pattern(pattern),
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(
        names,
        vec!["unsigned", "signed", "float", "bool", "char", "str", "pattern"]
    );
}

#[test]
fn test_to_unsigned_wraps_negative() {
    assert_eq!(Value::Signed(-1).to_unsigned().ok(), Some(u128::MAX));
    assert_eq!(Value::Char('A').to_unsigned().ok(), Some(65));
    assert_eq!(Value::Bool(true).to_unsigned().ok(), Some(1));
}

#[test]
fn test_float_to_integer_saturates() {
    assert_eq!(Value::Float(-3.7).to_unsigned().ok(), Some(0));
    assert_eq!(Value::Float(-3.7).to_signed().ok(), Some(-3));
    assert_eq!(Value::Float(f64::INFINITY).to_signed().ok(), Some(i128::MAX));
}

#[test]
fn test_to_bool_is_non_zero() {
    assert_eq!(Value::Unsigned(0).to_bool().ok(), Some(false));
    assert_eq!(Value::Signed(-4).to_bool().ok(), Some(true));
    assert_eq!(Value::Float(0.0).to_bool().ok(), Some(false));
    assert_eq!(Value::Char('\0').to_bool().ok(), Some(false));
    assert_eq!(Value::Char('x').to_bool().ok(), Some(true));
}

#[test]
fn test_string_has_no_numeric_interpretation() {
    let err = Value::string("12").to_signed().err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::InvalidCast {
            from: "str".to_string(),
            target: "signed",
        })
    );
}

#[test]
fn test_pattern_has_no_numeric_interpretation() {
    let pattern = DecodedPattern::new(0, 4, Value::Unsigned(7)).into_shared();
    let err = Value::Pattern(pattern).to_float().err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::InvalidCast { target: "float", .. })
    ));
}

#[test]
fn test_display_string() {
    assert_eq!(Value::Unsigned(42).to_display_string(), "42");
    assert_eq!(Value::Signed(-42).to_display_string(), "-42");
    assert_eq!(Value::Float(1.5).to_display_string(), "1.5");
    assert_eq!(Value::Bool(false).to_display_string(), "false");
    assert_eq!(Value::Char('z').to_display_string(), "z");
    assert_eq!(Value::string("abc").to_display_string(), "abc");

    let pattern = DecodedPattern::new(0, 1, Value::Unsigned(3))
        .with_display("Color::Blue")
        .into_shared();
    assert_eq!(Value::Pattern(pattern).to_display_string(), "Color::Blue");
}

#[test]
fn test_display_quotes_text() {
    assert_eq!(Value::Char('a').to_string(), "'a'");
    assert_eq!(Value::string("ab").to_string(), "\"ab\"");
}

#[test]
fn test_pattern_equality_is_identity() {
    let a = DecodedPattern::new(0, 1, Value::Unsigned(3)).into_shared();
    let b = DecodedPattern::new(0, 1, Value::Unsigned(3)).into_shared();
    assert_eq!(Value::Pattern(a.clone()), Value::Pattern(a.clone()));
    assert_ne!(Value::Pattern(a), Value::Pattern(b));
}

#[test]
fn test_cross_variant_values_are_unequal() {
    assert_ne!(Value::Unsigned(1), Value::Signed(1));
    assert_ne!(Value::Bool(true), Value::Unsigned(1));
}
