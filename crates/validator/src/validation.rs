//! Validation against a [`Rules`] registry
//!
//! Three entry points, all pure reads of the registry:
//!
//! - [`Rules::validate_one`] checks a single key/value pair.
//! - [`Rules::validate`] checks every pair of a flat map.
//! - [`Rules::validate_structured`] walks a [`Validatable`] value, composing
//!   dotted keys (`Address.City`) for nested fields.
//!
//! Every constraint of a field runs; failures accumulate in registration
//! order. Keys without registered constraints always pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::foundation::{FieldValue, Validatable};
use crate::registry::Rules;
use crate::report::{FieldReport, Report};

/// Separator between path segments of nested keys.
pub const PATH_SEPARATOR: char = '.';

// ============================================================================
// OPTIONS
// ============================================================================

/// What to do with registered keys that are absent from a flat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFields {
    /// Absent keys are not checked.
    #[default]
    Ignore,
    /// Absent keys are checked as if present with an empty value.
    Check,
}

/// Options for [`Rules::validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Policy for registered keys missing from the input.
    pub missing: MissingFields,
}

impl ValidateOptions {
    /// Options that also check registered keys missing from the input.
    #[must_use]
    pub fn check_missing() -> Self {
        Self {
            missing: MissingFields::Check,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

impl Rules {
    /// Validates a single key/value pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::Rules;
    /// use fieldcheck::validators::numeric;
    ///
    /// let mut rules = Rules::new();
    /// rules.register_required("age", numeric(), Some("must be numeric"));
    ///
    /// let report = rules.validate_one("age", "");
    /// assert!(!report.valid);
    /// assert_eq!(report.messages, ["This value is required", "must be numeric"]);
    ///
    /// assert!(rules.validate_one("unknown", "").valid);
    /// ```
    pub fn validate_one(&self, field: &str, value: &str) -> FieldReport {
        let mut report = FieldReport::valid();
        for constraint in self.constraints(field) {
            if let Err(message) = constraint.check(value) {
                tracing::trace!(field, message = %message, "constraint failed");
                report.valid = false;
                report.messages.push(message);
            }
        }
        report
    }

    /// Validates every key/value pair of a flat map.
    ///
    /// Registered keys that do not appear in `params` are not checked; use
    /// [`validate_with`](Self::validate_with) with [`MissingFields::Check`]
    /// to check them too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use fieldcheck::Rules;
    /// use fieldcheck::validators::not_empty;
    ///
    /// let mut rules = Rules::new();
    /// rules.register("a", not_empty, None);
    ///
    /// let params = HashMap::from([("a", ""), ("b", "ok")]);
    /// let report = rules.validate(&params);
    ///
    /// assert!(!report.is_valid());
    /// assert_eq!(report.errors_for("a"), ["This value is required"]);
    /// assert!(report.errors_for("b").is_empty());
    /// ```
    pub fn validate<I, K, V>(&self, params: I) -> Report
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.validate_with(params, &ValidateOptions::default())
    }

    /// Validates a flat map with explicit options.
    pub fn validate_with<I, K, V>(&self, params: I, options: &ValidateOptions) -> Report
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut report = Report::new();
        let mut seen = HashSet::new();
        let mut checked = 0_usize;

        for (key, value) in params {
            let key = key.as_ref();
            report.record(key, self.validate_one(key, value.as_ref()));
            checked += 1;
            if options.missing == MissingFields::Check {
                seen.insert(key.to_owned());
            }
        }

        if options.missing == MissingFields::Check {
            for field in self.fields().filter(|f| !seen.contains(*f)) {
                report.record(field, self.validate_one(field, ""));
                checked += 1;
            }
        }

        tracing::debug!(
            checked,
            failed = report.len(),
            missing = ?options.missing,
            "validated parameters"
        );
        report
    }

    /// Validates a structured value.
    ///
    /// Text fields are checked under their composed key; nested values are
    /// walked with `<key>.` as prefix and their failures flattened into the
    /// same report.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::{Rules, validatable};
    /// use fieldcheck::validators::not_empty;
    ///
    /// struct Address { city: String }
    /// struct Person { address: Address }
    ///
    /// validatable!(Address { city as "City" });
    /// validatable!(Person { ; nested address as "Address" });
    ///
    /// let mut rules = Rules::new();
    /// rules.register("Address.City", not_empty, None);
    ///
    /// let person = Person { address: Address { city: String::new() } };
    /// let report = rules.validate_structured(&person);
    ///
    /// assert_eq!(report.errors_for("Address.City"), ["This value is required"]);
    /// ```
    pub fn validate_structured(&self, value: &dyn Validatable) -> Report {
        let mut report = Report::new();
        let visited = self.walk(value, "", &mut report);
        tracing::debug!(
            checked = visited,
            failed = report.len(),
            "validated structure"
        );
        report
    }

    /// Walks `value` under `prefix`, returning the number of text fields checked.
    fn walk(&self, value: &dyn Validatable, prefix: &str, report: &mut Report) -> usize {
        let mut visited = 0;
        for (name, field) in value.fields() {
            let key = format!("{prefix}{name}");
            match field {
                FieldValue::Text(text) => {
                    report.record(&*key, self.validate_one(&key, text));
                    visited += 1;
                }
                FieldValue::Nested(nested) => {
                    let prefix = format!("{key}{PATH_SEPARATOR}");
                    visited += self.walk(nested, &prefix, report);
                }
            }
        }
        visited
    }
}

// ============================================================================
// TESTS
// ============================================================================
