//! Flat key/value validation.

use std::collections::HashMap;

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn is_numeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("numeric", "not a number"))
    }
}

#[fixture]
fn signup_rules() -> Rules {
    let mut rules = Rules::new();
    rules
        .register_required("email", email(), Some("Enter a valid email"))
        .register_required("age", is_numeric, Some("must be numeric"))
        .register("nickname", min_length(3), None)
        .register("nickname", max_length(8), Some("nickname too long"));
    rules
}

#[rstest]
fn valid_signup(signup_rules: Rules) {
    let params = HashMap::from([
        ("email", "ann@example.com"),
        ("age", "31"),
        ("nickname", "annie"),
    ]);

    let report = signup_rules.validate(&params);
    assert!(report.is_valid());
    assert!(report.is_empty());
    assert!(report.into_result().is_ok());
}

#[rstest]
fn every_failing_field_is_reported(signup_rules: Rules) {
    let params = HashMap::from([
        ("email", ""),
        ("age", "x"),
        ("nickname", "ab"),
        ("unregistered", ""),
    ]);

    let (valid, messages) = signup_rules.validate(&params).into_parts();
    assert!(!valid);
    assert_eq!(
        messages.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["age", "email", "nickname"]
    );
    assert_eq!(
        messages["email"],
        vec!["This value is required", "Enter a valid email"]
    );
    assert_eq!(messages["age"], vec!["must be numeric"]);
    assert_eq!(messages["nickname"], vec!["Must be at least 3 characters"]);
}

#[rstest]
#[case("", vec!["This value is required", "must be numeric"])]
#[case("12a", vec!["must be numeric"])]
#[case("12", vec![])]
fn required_numeric_field(
    signup_rules: Rules,
    #[case] value: &str,
    #[case] expected: Vec<&str>,
) {
    let report = signup_rules.validate_one("age", value);
    assert_eq!(report.valid, expected.is_empty());
    assert_eq!(report.messages, expected);
}

#[rstest]
fn both_length_rules_can_fail_together() {
    let mut rules = Rules::new();
    rules
        .register("code", min_length(10), Some("too short"))
        .register("code", max_length(2), Some("too long"));

    let report = rules.validate_one("code", "abcde");
    assert_eq!(report.messages, vec!["too short", "too long"]);
}

#[rstest]
fn missing_required_key_passes_by_default(signup_rules: Rules) {
    let report = signup_rules.validate([("nickname", "annie")]);
    assert!(report.is_valid());
}

#[rstest]
fn missing_required_key_fails_when_checked(signup_rules: Rules) {
    let report =
        signup_rules.validate_with([("nickname", "annie")], &ValidateOptions::check_missing());

    assert!(!report.is_valid());
    assert_eq!(
        report.errors_for("email"),
        ["This value is required", "Enter a valid email"]
    );
    assert_eq!(
        report.errors_for("age"),
        ["This value is required", "must be numeric"]
    );
    assert!(report.errors_for("nickname").is_empty());
}

#[rstest]
fn validate_options_deserialize() {
    let options: ValidateOptions = serde_json::from_str(r#"{ "missing": "check" }"#).unwrap();
    assert_eq!(options, ValidateOptions::check_missing());

    let defaults: ValidateOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults.missing, MissingFields::Ignore);
}

#[rstest]
fn into_result_carries_report(signup_rules: Rules) {
    let err = signup_rules
        .validate([("age", "")])
        .into_result()
        .unwrap_err();

    assert_eq!(err.report.errors_for("age").len(), 2);
    assert!(err.to_string().starts_with("validation failed: 1 invalid field(s)"));
}

#[test]
fn registry_is_shareable_across_threads() {
    let mut rules = Rules::new();
    rules.register_required("name", min_length(2), None);
    let rules = std::sync::Arc::new(rules);

    let mut handles = Vec::new();
    for value in ["", "a", "ann"] {
        let rules = std::sync::Arc::clone(&rules);
        handles.push(std::thread::spawn(move || {
            rules.validate_one("name", value).messages.len()
        }));
    }

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![2, 1, 0]);
}
