//! String content rules
//!
//! Rules that check a string against a regular expression.

use std::sync::LazyLock;

use crate::foundation::{Rule, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// REGEX RULE
// ============================================================================

/// Validates that a string matches a regular expression.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: regex::Regex,
}

impl MatchesRegex {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
}

impl Rule for MatchesRegex {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("regex")
                .with_param("pattern", self.pattern.as_str().to_string()))
        }
    }
}

/// Creates a [`MatchesRegex`] rule.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}

// ============================================================================
// EMAIL RULE
// ============================================================================

crate::rule! {
    /// Validates email address shape.
    pub Email;
    check(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
