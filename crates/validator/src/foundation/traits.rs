//! Core traits for the validation system
//!
//! - [`Rule`]: a check over a single string value.
//! - [`Validatable`]: a structure that enumerates its validated fields.

use std::fmt;

use crate::foundation::ValidationError;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A check over a single string value.
///
/// Every `Fn(&str) -> Result<(), ValidationError>` is a rule, so plain
/// functions and closures can be registered directly.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Rule, ValidationError};
///
/// struct NoSpaces;
///
/// impl Rule for NoSpaces {
///     fn check(&self, value: &str) -> Result<(), ValidationError> {
///         if value.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.check("alice").is_ok());
/// assert!(NoSpaces.check("a b").is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Checks the value.
    ///
    /// * `Ok(())` if the value passes
    /// * `Err(ValidationError)` carrying the default failure message
    fn check(&self, value: &str) -> Result<(), ValidationError>;
}

impl<F> Rule for F
where
    F: Fn(&str) -> Result<(), ValidationError> + Send + Sync,
{
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        self(value)
    }
}

// ============================================================================
// STRUCTURED VALUES
// ============================================================================

/// A single enumerated field of a [`Validatable`] value.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// A string leaf, validated against the rules of its composed key.
    Text(&'a str),
    /// A nested structure, walked with `<key>.` as the new prefix.
    Nested(&'a dyn Validatable),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
            FieldValue::Nested(_) => f.debug_tuple("Nested").field(&"<validatable>").finish(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

/// A structure whose fields can be validated by name.
///
/// Implementors list only the fields meant to be validated. String leaves
/// are checked against the rules registered for `prefix + name`; nested
/// values are walked recursively with `prefix + name + "."`.
///
/// Most structs implement this with the [`validatable!`](crate::validatable)
/// macro.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{FieldValue, Validatable};
///
/// struct Address {
///     city: String,
/// }
///
/// impl Validatable for Address {
///     fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
///         vec![("City", FieldValue::from(&self.city))]
///     }
/// }
/// ```
pub trait Validatable {
    /// Returns the fields to validate, in visiting order.
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)>;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        (**self).fields()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        (**self).fields()
    }
}

// ============================================================================
// TESTS
// ============================================================================
