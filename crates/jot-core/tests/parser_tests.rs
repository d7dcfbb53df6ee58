use jot_core::{parse, parse_with_depth, ParseError, Value};

/// Helper: parse and unwrap, for inputs the test asserts are valid.
fn ok(text: &str) -> Value {
    parse(text).unwrap_or_else(|e| panic!("expected {text:?} to parse, got {e}"))
}

/// Helper: the error a failing input produces.
fn err(text: &str) -> ParseError {
    parse(text).expect_err("expected parse failure")
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(ok("null"), Value::Null);
}

#[test]
fn parse_true() {
    assert_eq!(ok("true"), Value::Bool(true));
}

#[test]
fn parse_false() {
    assert_eq!(ok("false"), Value::Bool(false));
}

#[test]
fn literal_with_trailing_letters_fails() {
    assert_eq!(err("truee"), ParseError::RedundantText);
    assert_eq!(err("[truee]"), ParseError::UnknownFormat);
}

#[test]
fn misspelled_literal_fails() {
    assert_eq!(err("nul"), ParseError::UnknownFormat);
    assert_eq!(err("fals"), ParseError::UnknownFormat);
    assert_eq!(err("tru"), ParseError::UnknownFormat);
}

#[test]
fn literals_are_case_sensitive() {
    assert_eq!(err("True"), ParseError::UnknownFormat);
    assert_eq!(err("NULL"), ParseError::UnknownFormat);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn parse_integers() {
    assert_eq!(ok("0"), Value::Number(0.0));
    assert_eq!(ok("42"), Value::Number(42.0));
    assert_eq!(ok("-7"), Value::Number(-7.0));
}

#[test]
fn parse_floats() {
    assert_eq!(ok("3.14"), Value::Number(3.14));
    assert_eq!(ok("-0.5"), Value::Number(-0.5));
    assert_eq!(ok(".5"), Value::Number(0.5));
    assert_eq!(ok("5."), Value::Number(5.0));
}

#[test]
fn parse_exponents() {
    assert_eq!(ok("1e5"), Value::Number(1e5));
    assert_eq!(ok("2.5e-3"), Value::Number(2.5e-3));
    assert_eq!(ok("1E+2"), Value::Number(100.0));
}

#[test]
fn negative_zero_equals_zero() {
    assert_eq!(ok("-0"), Value::Number(0.0));
}

#[test]
fn double_dot_fails() {
    assert_eq!(err("123.456.789"), ParseError::InvalidNumber);
}

#[test]
fn bare_sign_or_dot_fails() {
    assert_eq!(err("-"), ParseError::InvalidNumber);
    assert_eq!(err("."), ParseError::InvalidNumber);
}

#[test]
fn dangling_exponent_fails() {
    assert_eq!(err("1e"), ParseError::InvalidNumber);
    assert_eq!(err("1e+"), ParseError::InvalidNumber);
}

#[test]
fn double_exponent_fails() {
    assert_eq!(err("1e5e5"), ParseError::InvalidNumber);
}

#[test]
fn embedded_sign_fails() {
    assert_eq!(err("1-2"), ParseError::InvalidNumber);
}

#[test]
fn leading_exponent_marker_fails() {
    // 'e' is not a value start; it falls through to the structural error.
    assert_eq!(err("e5"), ParseError::UnknownFormat);
}

#[test]
fn overflowing_literal_fails() {
    // The model holds finite doubles only.
    assert_eq!(err("1e999"), ParseError::InvalidNumber);
    assert_eq!(err("-1e999"), ParseError::InvalidNumber);
}

#[test]
fn leading_plus_fails() {
    assert_eq!(err("+1"), ParseError::UnknownFormat);
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn parse_simple_string() {
    assert_eq!(ok(r#""hello""#), Value::String("hello".to_string()));
}

#[test]
fn parse_empty_string() {
    assert_eq!(ok(r#""""#), Value::String(String::new()));
}

#[test]
fn parse_short_escapes() {
    assert_eq!(
        ok(r#""a\"b\\c\/d\n\r\t\f\b""#),
        Value::String("a\"b\\c/d\n\r\t\u{000C}\u{0008}".to_string())
    );
}

#[test]
fn parse_unicode_escape() {
    assert_eq!(ok(r#""\u0041""#), Value::String("A".to_string()));
}

#[test]
fn parse_unicode_escape_cjk() {
    assert_eq!(ok(r#""\u4e2d\u6587""#), Value::String("中文".to_string()));
}

#[test]
fn parse_unicode_escape_case_insensitive_digits() {
    assert_eq!(ok(r#""\u00Ff""#), Value::String("\u{FF}".to_string()));
    assert_eq!(ok(r#""\U0041""#), Value::String("A".to_string()));
}

#[test]
fn parse_surrogate_pair() {
    assert_eq!(ok(r#""\uD83D\uDE00""#), Value::String("😀".to_string()));
}

#[test]
fn raw_multibyte_utf8_passes_through() {
    assert_eq!(ok("\"caf\u{e9} 中\""), Value::String("café 中".to_string()));
}

#[test]
fn lone_high_surrogate_fails() {
    assert_eq!(err(r#""\uD800""#), ParseError::IllegalEscape);
}

#[test]
fn lone_low_surrogate_fails() {
    assert_eq!(err(r#""\uDC00""#), ParseError::IllegalEscape);
}

#[test]
fn high_surrogate_with_bad_partner_fails() {
    assert_eq!(err(r#""\uD800A""#), ParseError::IllegalEscape);
}

#[test]
fn truncated_unicode_escape_fails() {
    assert_eq!(err(r#""\u00"#), ParseError::IllegalEscape);
    assert_eq!(err(r#""\u00G1""#), ParseError::IllegalEscape);
}

#[test]
fn unknown_escape_fails() {
    assert_eq!(err(r#""\x""#), ParseError::IllegalEscape);
    assert_eq!(err(r#""\q""#), ParseError::IllegalEscape);
}

#[test]
fn raw_control_bytes_fail() {
    assert_eq!(err("\"a\tb\""), ParseError::IllegalEscape);
    assert_eq!(err("\"a\nb\""), ParseError::IllegalEscape);
    assert_eq!(err("\"a\rb\""), ParseError::IllegalEscape);
}

#[test]
fn unterminated_string_fails() {
    assert_eq!(err("\"abc"), ParseError::UnclosedString);
    assert_eq!(err("\"abc\\"), ParseError::UnclosedString);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_empty_array() {
    assert_eq!(ok("[]"), Value::Array(vec![]));
    assert_eq!(ok("[ \t\n ]"), Value::Array(vec![]));
}

#[test]
fn parse_flat_array() {
    assert_eq!(
        ok("[1, 2, 3]"),
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn parse_mixed_array() {
    let v = ok(r#"[1, "two", true, null]"#);
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("two".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn trailing_comma_in_array_fails() {
    assert_eq!(err("[1,2,]"), ParseError::UnknownFormat);
}

#[test]
fn missing_comma_in_array_fails() {
    assert_eq!(err("[1 2]"), ParseError::UnknownFormat);
}

#[test]
fn unterminated_array_fails() {
    assert_eq!(err("[1, 2"), ParseError::UnclosedArray);
    assert_eq!(err("[1,"), ParseError::UnclosedArray);
    assert_eq!(err("["), ParseError::UnclosedArray);
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_empty_object() {
    assert_eq!(ok("{}"), Value::Object(Default::default()));
}

#[test]
fn parse_flat_object() {
    let v = ok(r#"{"a": 1, "b": true}"#);
    assert_eq!(v.at("a").unwrap(), &Value::Number(1.0));
    assert_eq!(v.at("b").unwrap(), &Value::Bool(true));
}

#[test]
fn parse_nested_object() {
    let v = ok(r#"{"outer": {"inner": [1, 2]}}"#);
    assert_eq!(
        v.at("outer").unwrap().at("inner").unwrap().at(1).unwrap(),
        &Value::Number(2.0)
    );
}

#[test]
fn duplicate_keys_overwrite() {
    let v = ok(r#"{"k": 1, "k": 2}"#);
    assert_eq!(v.as_object().unwrap().len(), 1);
    assert_eq!(v.at("k").unwrap(), &Value::Number(2.0));
}

#[test]
fn escaped_key_is_unescaped() {
    let v = ok(r#"{"a\nb": 1}"#);
    assert_eq!(v.at("a\nb").unwrap(), &Value::Number(1.0));
}

#[test]
fn missing_value_fails() {
    assert_eq!(err(r#"{"k": }"#), ParseError::UnknownFormat);
}

#[test]
fn missing_colon_fails() {
    assert_eq!(err(r#"{"k" 1}"#), ParseError::UnknownFormat);
}

#[test]
fn unquoted_key_fails() {
    assert_eq!(err("{k: 1}"), ParseError::UnknownFormat);
}

#[test]
fn trailing_comma_in_object_fails() {
    assert_eq!(err(r#"{"a": 1,}"#), ParseError::UnknownFormat);
}

#[test]
fn unterminated_object_fails() {
    assert_eq!(err("{"), ParseError::UnclosedObject);
    assert_eq!(err(r#"{"a": 1"#), ParseError::UnclosedObject);
    assert_eq!(err(r#"{"a":"#), ParseError::UnclosedObject);
    assert_eq!(err(r#"{"a""#), ParseError::UnclosedObject);
}

// ============================================================================
// Whitespace and trailing content
// ============================================================================

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(ok(" \t\r\n 42 \n"), Value::Number(42.0));
}

#[test]
fn empty_input_fails() {
    assert_eq!(err(""), ParseError::EmptyData);
    assert_eq!(err("   \t\n"), ParseError::EmptyData);
}

#[test]
fn trailing_content_fails() {
    assert_eq!(err("null extra"), ParseError::RedundantText);
    assert_eq!(err("1 2"), ParseError::RedundantText);
    assert_eq!(err("{} x"), ParseError::RedundantText);
    assert_eq!(err("[1][2]"), ParseError::RedundantText);
}

#[test]
fn stray_token_fails() {
    assert_eq!(err("#"), ParseError::UnknownFormat);
    assert_eq!(err("'single'"), ParseError::UnknownFormat);
}

// ============================================================================
// Depth budget
// ============================================================================

fn nested_arrays(depth: usize) -> String {
    let mut s = String::new();
    s.push_str(&"[".repeat(depth));
    s.push('1');
    s.push_str(&"]".repeat(depth));
    s
}

#[test]
fn nesting_at_the_limit_succeeds() {
    assert!(parse_with_depth(&nested_arrays(3), 3).is_ok());
    assert!(parse_with_depth(&nested_arrays(64), 64).is_ok());
}

#[test]
fn nesting_past_the_limit_fails() {
    assert_eq!(
        parse_with_depth(&nested_arrays(4), 3),
        Err(ParseError::DepthExceeded)
    );
    assert_eq!(
        parse_with_depth(&nested_arrays(65), 64),
        Err(ParseError::DepthExceeded)
    );
}

#[test]
fn default_depth_limit_is_64() {
    assert!(parse(&nested_arrays(64)).is_ok());
    assert_eq!(parse(&nested_arrays(65)), Err(ParseError::DepthExceeded));
}

#[test]
fn depth_counts_objects_too() {
    let deep = format!("{}1{}", r#"{"k":"#.repeat(3), "}".repeat(3));
    assert!(parse_with_depth(&deep, 3).is_ok());
    assert_eq!(
        parse_with_depth(&deep, 2),
        Err(ParseError::DepthExceeded)
    );
}

#[test]
fn depth_guard_fires_before_reading_the_subtree() {
    // A pathological prefix with no closing brackets still fails fast.
    let bomb = "[".repeat(100_000);
    assert_eq!(parse(&bomb), Err(ParseError::DepthExceeded));
}

#[test]
fn scalars_ignore_the_depth_budget() {
    assert!(parse_with_depth("42", 0).is_ok());
    assert_eq!(
        parse_with_depth("[]", 0),
        Err(ParseError::DepthExceeded)
    );
}

// ============================================================================
// FromStr
// ============================================================================

#[test]
fn value_implements_from_str() {
    let v: Value = r#"{"n": 1}"#.parse().unwrap();
    assert_eq!(v.at("n").unwrap(), &Value::Number(1.0));
    assert!("nope".parse::<Value>().is_err());
}
