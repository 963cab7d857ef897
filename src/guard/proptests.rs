//! Property-Based Tests for the Input Guard
//!
//! This module contains property-based tests using proptest to verify that
//! sanitizer and validator invariants hold for random inputs, not just the
//! hand-picked cases in the unit tests.
//!
//! # Test Strategies
//!
//! - **Sanitized Text**: Output never carries raw markup characters and is
//!   stable under repeated sanitization
//! - **File Names**: Output stays within the safe alphabet and length
//! - **Structure Traversal**: Every string in a payload is sanitized, the
//!   payload shape survives
//! - **Validators**: Total functions consistent with their definitions
//!
//! # Running the Tests
//!
//! ```bash
//! cargo test --lib guard::proptests
//! ```

use proptest::prelude::*;
use serde_json::Value;

use super::csrf::validate_token;
use super::sanitize::{sanitize_file_name, sanitize_text, sanitize_value};
use super::validate::{has_sql_injection_pattern, is_valid_country_code, is_valid_date,
    is_valid_email};

// Helper: True when text carries none of the characters the sanitizer escapes
fn is_inert(text: &str) -> bool {
    !text.contains('<') && !text.contains('>') && !text.contains('\'') && !text.contains('"')
}

// Helper: True when every string in the tree, keys included, is inert
fn all_strings_inert(value: &Value) -> bool {
    match value {
        Value::String(text) => is_inert(text),
        Value::Array(items) => items.iter().all(all_strings_inert),
        Value::Object(map) => map
            .iter()
            .all(|(key, val)| is_inert(key) && all_strings_inert(val)),
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
    }
}

// Helper: Variant name of a payload value
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Helper: Generate arbitrary scalar payload values
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        ".*".prop_map(Value::String),
    ]
}

// Helper: Generate arbitrary nested payloads up to depth 3
fn arb_payload() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((".{0,12}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

// ============================================================================
// Property 1: Sanitized Text Is Inert
// ============================================================================

proptest! {
    /// Sanitized text never carries a raw angle bracket or quote
    #[test]
    fn prop_sanitized_text_has_no_raw_markup(input in ".*") {
        let output = sanitize_text(&input);
        prop_assert!(is_inert(&output));
    }

    /// Sanitized text carries no leading or trailing whitespace
    #[test]
    fn prop_sanitized_text_is_trimmed(input in ".*") {
        let output = sanitize_text(&input);
        prop_assert_eq!(output.trim(), output.as_str());
    }

    /// Sanitizing twice changes nothing
    #[test]
    fn prop_sanitize_text_idempotent(input in ".*") {
        let once = sanitize_text(&input);
        let twice = sanitize_text(&once);
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Property 2: File Name Safety
// ============================================================================

proptest! {
    /// File names stay within the safe alphabet
    #[test]
    fn prop_file_name_alphabet(input in ".*") {
        let output = sanitize_file_name(&input);
        prop_assert!(output
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')));
    }

    /// File names never exceed 255 characters
    #[test]
    fn prop_file_name_length(input in ".*") {
        prop_assert!(sanitize_file_name(&input).len() <= 255);
    }

    /// File names never carry a dot run
    #[test]
    fn prop_file_name_no_dot_runs(input in ".*") {
        prop_assert!(!sanitize_file_name(&input).contains(".."));
    }

    /// A sanitized file name is a fixed point
    #[test]
    fn prop_file_name_idempotent(input in ".*") {
        let once = sanitize_file_name(&input);
        let twice = sanitize_file_name(&once);
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Property 3: Structure Traversal
// ============================================================================

proptest! {
    /// Every string anywhere in a payload comes out inert, keys included
    #[test]
    fn prop_every_string_sanitized(payload in arb_payload()) {
        let sanitized = sanitize_value(payload);
        prop_assert!(all_strings_inert(&sanitized));
    }

    /// The payload keeps its top-level variant
    #[test]
    fn prop_root_variant_preserved(payload in arb_payload()) {
        let expected = kind(&payload);
        let sanitized = sanitize_value(payload);
        prop_assert_eq!(kind(&sanitized), expected);
    }

    /// Arrays keep their length
    #[test]
    fn prop_array_length_preserved(items in prop::collection::vec(".*", 0..8)) {
        let payload = Value::Array(items.iter().cloned().map(Value::String).collect());
        match sanitize_value(payload) {
            Value::Array(sanitized) => prop_assert_eq!(sanitized.len(), items.len()),
            other => prop_assert!(false, "array became {}", kind(&other)),
        }
    }

    /// Scalars are returned unchanged
    #[test]
    fn prop_scalars_pass_through(n in any::<i64>(), b in any::<bool>()) {
        prop_assert_eq!(sanitize_value(Value::from(n)), Value::from(n));
        prop_assert_eq!(sanitize_value(Value::Bool(b)), Value::Bool(b));
        prop_assert_eq!(sanitize_value(Value::Null), Value::Null);
    }
}

// ============================================================================
// Property 4: Validators Are Total and Consistent
// ============================================================================

proptest! {
    /// Date validation agrees with the calendar
    #[test]
    fn prop_valid_date_matches_calendar(y in 1000i32..=9999, m in 1u32..=12, d in 1u32..=31) {
        let date = format!("{y:04}-{m:02}-{d:02}");
        let exists = chrono::NaiveDate::from_ymd_opt(y, m, d).is_some();
        prop_assert_eq!(is_valid_date(&date), exists);
    }

    /// Emails with whitespace or without an @ never validate
    #[test]
    fn prop_email_rejects_whitespace(input in ".*") {
        if input.chars().any(char::is_whitespace) || !input.contains('@') {
            prop_assert!(!is_valid_email(&input));
        }
    }

    /// Country codes validate only at exactly two characters
    #[test]
    fn prop_country_code_length(input in ".*") {
        if input.chars().count() != 2 {
            prop_assert!(!is_valid_country_code(&input));
        }
    }

    /// Quote and terminator tokens always trip the injection heuristic
    #[test]
    fn prop_sql_tokens_always_flag(input in ".*") {
        if input.contains('\'') || input.contains('"') || input.contains(';') {
            prop_assert!(has_sql_injection_pattern(&input));
        }
    }
}

// ============================================================================
// Property 5: Token Validation Shape
// ============================================================================

proptest! {
    /// A string validates against itself exactly when it is token-shaped
    #[test]
    fn prop_self_validation_requires_token_length(input in ".*") {
        prop_assert_eq!(validate_token(&input, &input), input.len() == 64);
    }
}
