//! Character-class and membership rules, plus an adapter for boolean checks.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Rule, ValidationError};

// ============================================================================
// NUMERIC
// ============================================================================

crate::rule! {
    /// Validates that a string is non-empty and consists of ASCII digits.
    pub Numeric;
    check(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("numeric", "Must contain only digits") }
    fn numeric();
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a string equals one of a fixed set of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    values: Vec<String>,
}

impl OneOf {
    /// Creates the rule from the allowed values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for OneOf {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.values.iter().any(|allowed| allowed == value) {
            Ok(())
        } else {
            Err(
                ValidationError::new("one_of", "Must be one of the allowed values")
                    .with_param("allowed", self.values.join(",")),
            )
        }
    }
}

/// Creates a [`OneOf`] rule.
pub fn one_of<I, S>(values: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(values)
}

// ============================================================================
// PREDICATE ADAPTER
// ============================================================================

/// Turns a boolean check into a [`Rule`] with a fixed code and message.
#[derive(Clone)]
pub struct Predicate<F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    check: F,
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("check", &"<function>")
            .finish()
    }
}

impl<F> Rule for Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()))
        }
    }
}

/// Creates a [`Predicate`] rule.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Rule;
/// use fieldcheck::validators::predicate;
///
/// let is_decimal = predicate("decimal", "Must be a decimal number", |v| v.parse::<f64>().is_ok());
/// assert!(is_decimal.check("1.5").is_ok());
/// assert_eq!(is_decimal.check("x").unwrap_err().message, "Must be a decimal number");
/// ```
pub fn predicate<F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    check: F,
) -> Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    Predicate {
        code: code.into(),
        message: message.into(),
        check,
    }
}

// ============================================================================
// TESTS
// ============================================================================
