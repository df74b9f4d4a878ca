//! Validation results
//!
//! A failed validation is a normal outcome, not an error: every validation
//! method returns a report. [`Report::into_result`] exists for callers that
//! prefer `?` propagation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ============================================================================
// FIELD REPORT
// ============================================================================

/// Outcome of checking one key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// True if every constraint passed.
    pub valid: bool,
    /// Failure messages in constraint registration order.
    pub messages: Vec<String>,
}

impl FieldReport {
    /// A passing result with no messages.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            messages: Vec::new(),
        }
    }

    /// Returns true if every constraint passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Converts into the `(valid, messages)` pair.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.valid, self.messages)
    }
}

impl Default for FieldReport {
    fn default() -> Self {
        Self::valid()
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of validating a flat map or a structure.
///
/// Only keys with at least one failure appear in `messages`. Keys are kept
/// sorted so reports compare and serialize deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    valid: bool,
    messages: BTreeMap<String, Vec<String>>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Creates a valid, empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            valid: true,
            messages: BTreeMap::new(),
        }
    }

    /// Records the outcome for `key`. Passing outcomes leave the report untouched.
    ///
    /// Messages for a key that already failed are appended.
    pub fn record(&mut self, key: impl Into<String>, field: FieldReport) {
        if field.valid {
            return;
        }
        self.valid = false;
        self.messages
            .entry(key.into())
            .or_default()
            .extend(field.messages);
    }

    /// Returns true if nothing failed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failure messages keyed by field.
    pub fn messages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.messages
    }

    /// Failure messages for one field; empty if it passed or was not checked.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.messages.get(field).map_or(&[][..], Vec::as_slice)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Converts into the `(valid, messages)` pair.
    pub fn into_parts(self) -> (bool, BTreeMap<String, Vec<String>>) {
        (self.valid, self.messages)
    }

    /// Converts to a `Result`, carrying the report on failure.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), InvalidInput> {
        if self.valid {
            Ok(())
        } else {
            Err(InvalidInput { report: self })
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "valid");
        }
        write!(f, "{} invalid field(s)", self.messages.len())?;
        for (field, messages) in &self.messages {
            write!(f, "\n - {field}: {}", messages.join("; "))?;
        }
        Ok(())
    }
}

// ============================================================================
// INVALID INPUT
// ============================================================================

/// Returned by [`Report::into_result`] when validation failed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("validation failed: {report}")]
pub struct InvalidInput {
    /// The failing report.
    pub report: Report,
}

// ============================================================================
// TESTS
// ============================================================================
