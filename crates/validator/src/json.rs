//! `serde_json::Value` as a validated structure.
//!
//! An object enumerates its string members as text fields and its object
//! members as nested structures. Arrays, numbers, booleans and null are
//! not enumerated, and a non-object value has no fields at all.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Rules;
//! use fieldcheck::validators::not_empty;
//! use serde_json::json;
//!
//! let mut rules = Rules::new();
//! rules.register("Address.City", not_empty, None);
//!
//! let report = rules.validate_structured(&json!({ "Address": { "City": "" } }));
//! assert_eq!(report.errors_for("Address.City"), ["This value is required"]);
//! ```

use serde_json::Value;

use crate::foundation::{FieldValue, Validatable};

impl Validatable for Value {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        let Value::Object(map) = self else {
            return Vec::new();
        };

        map.iter()
            .filter_map(|(name, value)| match value {
                Value::String(text) => Some((name.as_str(), FieldValue::Text(text))),
                Value::Object(_) => Some((name.as_str(), FieldValue::Nested(value))),
                _ => None,
            })
            .collect()
    }
}
