//! Error type returned by a single failing rule
//!
//! A [`ValidationError`] is what a [`Rule`](super::Rule) produces when it
//! rejects a value. Its `message` is the default text reported for the
//! field unless the constraint was registered with an override.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rule failure: machine-readable code, human-readable default message
/// and optional parameters.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 3 characters")
///     .with_param("min", "3");
///
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "invalid_format"
    pub code: Cow<'static, str>,

    /// Default human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-2).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The error produced by the built-in non-empty rule.
    pub fn required() -> Self {
        Self::new("required", "This value is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// TESTS
// ============================================================================
