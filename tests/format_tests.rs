use semantic_bool::{
    to_on_or_off, to_on_or_off_with, to_one_or_zero, to_one_or_zero_with, to_true_or_false,
    to_true_or_false_with, to_y_or_n, to_y_or_n_with, to_yes_or_no, to_yes_or_no_with, Error,
    FormatOptions, Formatted, Selector, Value,
};

const NAMED: [&str; 4] = [
    "to_native_bool",
    "to_env_bool",
    "to_tri_state_bool",
    "to_bool",
];

#[test]
fn test_to_one_or_zero() {
    assert_eq!(
        to_one_or_zero(&Value::Bool(false)).unwrap(),
        Formatted::Known(0)
    );
    assert_eq!(
        to_one_or_zero(&Value::Bool(true)).unwrap(),
        Formatted::Known(1)
    );

    for name in NAMED {
        let options = FormatOptions::new().by_name(name).unwrap();
        assert_eq!(
            to_one_or_zero_with(&Value::Bool(false), options.clone()).unwrap(),
            Formatted::Known(0)
        );
        assert_eq!(
            to_one_or_zero_with(&Value::Bool(true), options).unwrap(),
            Formatted::Known(1)
        );
    }
}

#[test]
fn test_to_y_or_n() {
    assert_eq!(
        to_y_or_n(&Value::Bool(false)).unwrap(),
        Formatted::Known("n")
    );
    assert_eq!(
        to_y_or_n(&Value::Bool(true)).unwrap(),
        Formatted::Known("y")
    );

    for name in NAMED {
        let options = FormatOptions::new().by_name(name).unwrap();
        assert_eq!(
            to_y_or_n_with(&Value::Bool(false), options.clone()).unwrap(),
            Formatted::Known("n")
        );
        assert_eq!(
            to_y_or_n_with(&Value::Bool(true), options).unwrap(),
            Formatted::Known("y")
        );
    }
}

#[test]
fn test_to_yes_or_no() {
    assert_eq!(
        to_yes_or_no(&Value::Bool(false)).unwrap(),
        Formatted::Known("no")
    );
    assert_eq!(
        to_yes_or_no(&Value::Bool(true)).unwrap(),
        Formatted::Known("yes")
    );

    for name in NAMED {
        let options = FormatOptions::new().by_name(name).unwrap();
        assert_eq!(
            to_yes_or_no_with(&Value::Bool(false), options.clone()).unwrap(),
            Formatted::Known("no")
        );
        assert_eq!(
            to_yes_or_no_with(&Value::Bool(true), options).unwrap(),
            Formatted::Known("yes")
        );
    }
}

#[test]
fn test_to_on_or_off() {
    assert_eq!(
        to_on_or_off(&Value::Bool(false)).unwrap(),
        Formatted::Known("off")
    );
    assert_eq!(
        to_on_or_off(&Value::Bool(true)).unwrap(),
        Formatted::Known("on")
    );

    for name in NAMED {
        let options = FormatOptions::new().by_name(name).unwrap();
        assert_eq!(
            to_on_or_off_with(&Value::Bool(false), options.clone()).unwrap(),
            Formatted::Known("off")
        );
        assert_eq!(
            to_on_or_off_with(&Value::Bool(true), options).unwrap(),
            Formatted::Known("on")
        );
    }
}

#[test]
fn test_to_true_or_false() {
    assert_eq!(
        to_true_or_false(&Value::Bool(false)).unwrap(),
        Formatted::Known(false)
    );
    assert_eq!(
        to_true_or_false(&Value::from("")).unwrap(),
        Formatted::Known(true)
    );

    let env = FormatOptions::new().by(Selector::EnvBool);
    assert_eq!(
        to_true_or_false_with(&Value::from(""), env).unwrap(),
        Formatted::Known(false)
    );
}

#[test]
fn test_unsupported_selector_fails_before_formatting() {
    let err = FormatOptions::new().by_name("not_supported").unwrap_err();
    assert_eq!(err, Error::UnsupportedSelector("not_supported".to_string()));
    assert!(err.to_string().contains("`not_supported`"));
}

#[test]
fn test_absent_input_returns_unknown_untouched() {
    assert_eq!(
        to_one_or_zero(&Value::Null).unwrap(),
        Formatted::Unknown(false)
    );

    let options = FormatOptions::new().unknown(7);
    assert_eq!(
        to_one_or_zero_with(&Value::Null, options).unwrap(),
        Formatted::Unknown(7)
    );

    // The unknown value is not coerced, even by a rule that would flip it.
    let options = FormatOptions::new().by(Selector::Blank).unknown(true);
    assert_eq!(
        to_y_or_n_with(&Value::Null, options).unwrap(),
        Formatted::Unknown(true)
    );

    let options = FormatOptions::new().unknown(Some("n/a".to_string()));
    assert_eq!(
        to_yes_or_no_with(&Value::Null, options).unwrap(),
        Formatted::Unknown(Some("n/a".to_string()))
    );
}

#[test]
fn test_selector_flips_the_outcome() {
    let blank = FormatOptions::new().by(Selector::Blank);
    assert_eq!(
        to_one_or_zero_with(&Value::Bool(false), blank).unwrap(),
        Formatted::Known(1)
    );

    let present = FormatOptions::new().by(Selector::Present);
    assert_eq!(
        to_on_or_off_with(&Value::from("  "), present).unwrap(),
        Formatted::Known("off")
    );

    let is_false = FormatOptions::new().by(Selector::False);
    assert_eq!(
        to_y_or_n_with(&Value::Bool(false), is_false).unwrap(),
        Formatted::Known("y")
    );
}

#[test]
fn test_capability_errors_surface() {
    let present = FormatOptions::new().by_name("present").unwrap();
    let err = to_yes_or_no_with(&Value::bare(42u32), present).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bare object does not respond to `is_blank`"
    );
}

#[test]
fn test_formatted_display() {
    let word = to_on_or_off(&Value::from(1)).unwrap();
    assert_eq!(format!("feature is {word}"), "feature is on");
}
