//! String length rules
//!
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Fails when the value is exactly the empty string.
///
/// This is the rule [`Rules::register_required`](crate::Rules::register_required)
/// puts in front of every required field. Whitespace-only values pass.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::validators::not_empty;
///
/// assert!(not_empty("x").is_ok());
/// assert!(not_empty(" ").is_ok());
/// assert_eq!(not_empty("").unwrap_err().message, "This value is required");
/// ```
pub fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::required())
    } else {
        Ok(())
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    check(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    check(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
