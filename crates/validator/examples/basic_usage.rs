//! Register rules in code and from JSON, then validate a form and a document.
//!
//! Run with `cargo run -p fieldcheck --example basic_usage`.

use std::collections::HashMap;

use fieldcheck::prelude::*;
use serde_json::json;

struct Address {
    city: String,
}

struct Signup {
    email: String,
    age: String,
    address: Address,
}

validatable!(Address { city as "City" });
validatable!(Signup { email, age; nested address as "Address" });

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rules = Rules::from_config(&RulesConfig::from_json(
        r#"{ "fields": { "Address.City": { "required": true } } }"#,
    )?)?;
    rules
        .register_required("email", email(), Some("Enter a valid email"))
        .register_required("age", numeric(), Some("Age must be a number"));

    let form = HashMap::from([("email", "ann@example"), ("age", "")]);
    println!("form: {}", rules.validate(&form));

    let signup = Signup {
        email: "ann@example.com".to_string(),
        age: "31".to_string(),
        address: Address {
            city: String::new(),
        },
    };
    println!("struct: {}", rules.validate_structured(&signup));

    let document = json!({ "email": "", "age": "x", "Address": { "City": "Oslo" } });
    let report = rules.validate_structured(&document);
    println!(
        "json: {}",
        serde_json::to_string_pretty(&report).unwrap_or_default()
    );

    Ok(())
}
