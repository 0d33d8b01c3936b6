//! Every rule applied to the same inputs, side by side.
//!
//! Each row lists the input and the expected outcome of truthiness, env-flag
//! parsing and the tri-state cast.

use num_bigint::BigInt;
use semantic_bool::{
    is_blank, is_present, to_env_bool, to_native_bool, to_tri_state_bool, Value, ValueMap, ValueSet,
};

#[derive(Debug, PartialEq)]
struct Outcome {
    native: bool,
    env: bool,
    tri_state: Option<bool>,
}

fn bulk(value: &Value) -> Outcome {
    Outcome {
        native: to_native_bool(value),
        env: to_env_bool(value),
        tri_state: to_tri_state_bool(value),
    }
}

fn expect(native: bool, env: bool, tri_state: Option<bool>) -> Outcome {
    Outcome {
        native,
        env,
        tri_state,
    }
}

/// Checks a spelling both as text and as a symbol.
fn assert_spelling(spelling: &str, env: bool, tri_state: bool) {
    let expected = expect(true, env, Some(tri_state));
    assert_eq!(bulk(&Value::from(spelling)), expected, "text {spelling:?}");
    assert_eq!(
        bulk(&Value::symbol(spelling)),
        expected,
        "symbol {spelling:?}"
    );
}

#[test]
fn test_booleans_and_absent() {
    assert_eq!(bulk(&Value::Bool(true)), expect(true, true, Some(true)));
    assert_eq!(bulk(&Value::Bool(false)), expect(false, false, Some(false)));
    assert_eq!(bulk(&Value::Null), expect(false, false, Some(true)));
    assert_eq!(bulk(&Value::from("")), expect(true, false, None));
}

#[test]
fn test_single_letters() {
    assert_spelling("t", true, true);
    assert_spelling("f", false, false);
    assert_spelling("T", true, true);
    assert_spelling("F", false, false);
    assert_spelling("y", true, true);
    assert_spelling("n", false, true);
}

#[test]
fn test_true_false_spellings() {
    assert_spelling("true", true, true);
    assert_spelling("false", false, false);
    assert_spelling("True", true, true);
    assert_spelling("False", false, true);
    assert_spelling("tRuE", false, true);
    assert_spelling("fAlSe", false, true);
    assert_spelling("TRUE", true, true);
    assert_spelling("FALSE", false, false);
}

#[test]
fn test_on_off_spellings() {
    assert_spelling("on", true, true);
    assert_spelling("off", false, false);
    assert_spelling("On", true, true);
    assert_spelling("Off", false, true);
    assert_spelling("oN", false, true);
    assert_spelling("oFf", false, true);
    assert_spelling("ON", true, true);
    assert_spelling("OFF", false, false);
}

#[test]
fn test_yes_no_spellings() {
    assert_spelling("yes", true, true);
    assert_spelling("no", false, true);
    assert_spelling("Yes", true, true);
    assert_spelling("No", false, true);
    assert_spelling("yEs", false, true);
    assert_spelling("nO", false, true);
    assert_spelling("YES", true, true);
    assert_spelling("NO", false, true);
}

#[test]
fn test_integer_spellings() {
    assert_spelling("1", true, true);
    assert_spelling("0", false, false);
    assert_spelling("2", true, true);
    assert_spelling("-1", false, true);
}

#[test]
fn test_integer_literal_spellings() {
    assert_spelling(" 1", true, true);
    assert_spelling("1\n", true, true);
    assert_spelling("0x1A", true, true);
    assert_spelling("0b10", true, true);
    assert_spelling("1_000", true, true);
    assert_spelling("0x0", false, true);
    assert_spelling("08", false, true);
    assert_spelling("1__0", false, true);
}

#[test]
fn test_decimal_spellings() {
    for spelling in ["1.0", "0.0", "2.0", "-1.0"] {
        assert_spelling(spelling, false, true);
    }
}

#[test]
fn test_integers() {
    assert_eq!(bulk(&Value::from(1)), expect(true, true, Some(true)));
    assert_eq!(bulk(&Value::from(0)), expect(true, false, Some(false)));
    assert_eq!(bulk(&Value::from(2)), expect(true, true, Some(true)));
    assert_eq!(bulk(&Value::from(-1)), expect(true, false, Some(true)));

    let huge = BigInt::from(u64::MAX) * BigInt::from(4);
    assert_eq!(
        bulk(&Value::from(huge.clone())),
        expect(true, true, Some(true))
    );
    assert_eq!(bulk(&Value::from(-huge)), expect(true, false, Some(true)));
}

#[test]
fn test_floats() {
    for float in [1.0, 0.0, 2.0, -1.0] {
        assert_eq!(
            bulk(&Value::from(float)),
            expect(true, false, Some(true)),
            "{float}"
        );
    }
}

#[test]
fn test_collections_and_objects() {
    assert_eq!(bulk(&Value::Array(vec![])), expect(true, false, Some(true)));
    assert_eq!(
        bulk(&Value::Object(ValueMap::new())),
        expect(true, false, Some(true))
    );
    assert_eq!(
        bulk(&Value::Set(ValueSet::new())),
        expect(true, false, Some(true))
    );
    assert_eq!(bulk(&Value::bare(())), expect(true, false, Some(true)));
}

#[test]
fn test_blank_and_present_table() {
    let cases = [
        (Value::Null, true),
        (Value::Bool(false), true),
        (Value::Bool(true), false),
        (Value::from(""), true),
        (Value::from("   "), true),
        (Value::from(" \t\r\n\u{b}\u{c}"), true),
        (Value::from("\u{3000}\u{a0}\u{2029}"), true),
        (Value::from("a"), false),
        (Value::from("  a  "), false),
        (Value::from("\u{200b}"), false),
        (Value::Array(vec![]), true),
        (Value::Array(vec![Value::from(1)]), false),
        (Value::Array(vec![Value::Null]), false),
        (Value::Object(ValueMap::new()), true),
        (Value::Set(ValueSet::new()), true),
        (Value::symbol(""), true),
        (Value::symbol("x"), false),
        (Value::from(0), false),
        (Value::from(0.0), false),
        (Value::from(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), false),
    ];

    for (value, blank) in cases {
        assert_eq!(is_blank(&value).unwrap(), blank, "{value:?}");
        assert_eq!(is_present(&value).unwrap(), !blank, "{value:?}");
    }
}
