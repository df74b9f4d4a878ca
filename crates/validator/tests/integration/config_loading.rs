//! Registries loaded from declarative rule sets.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const RULE_SET: &str = r#"{
    "fields": {
        "email": {
            "required": true,
            "rules": [{ "rule": "email", "message": "bad email" }]
        },
        "Address.City": { "required": true },
        "zip": {
            "rules": [
                { "rule": "numeric" },
                { "rule": "matches", "pattern": "^[0-9]{5}$", "message": "five digits" }
            ]
        },
        "plan": { "rules": [{ "rule": "one_of", "values": ["free", "pro"] }] }
    }
}"#;

#[test]
fn loaded_rules_validate_flat_maps() {
    let rules = Rules::from_config(&RulesConfig::from_json(RULE_SET).unwrap()).unwrap();

    let report = rules.validate([("email", "nope"), ("zip", "12a"), ("plan", "gold")]);

    assert_eq!(report.errors_for("email"), ["bad email"]);
    assert_eq!(report.errors_for("zip"), ["Must contain only digits", "five digits"]);
    assert_eq!(report.errors_for("plan"), ["Must be one of the allowed values"]);
}

#[test]
fn loaded_rules_validate_structures() {
    let rules = Rules::from_config(&RulesConfig::from_json(RULE_SET).unwrap()).unwrap();

    let report = rules.validate_structured(&json!({
        "email": "ann@example.com",
        "Address": { "City": "" }
    }));

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors_for("Address.City"), ["This value is required"]);
}

#[test]
fn config_extends_code_registered_rules() {
    let mut rules = Rules::new();
    rules.register("zip", min_length(5), Some("zip too short"));
    rules
        .extend_from_config(&RulesConfig::from_json(RULE_SET).unwrap())
        .unwrap();

    let report = rules.validate_one("zip", "1");
    assert_eq!(report.messages, vec!["zip too short", "five digits"]);
}

#[test]
fn malformed_document_is_rejected() {
    let err = RulesConfig::from_json(
        r#"{ "fields": { "a": { "rules": [{ "rule": "min_length" }] } } }"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid rule set:"));
}
