//! Rule registry
//!
//! [`Rules`] maps a field name (or dotted path such as `Address.City`) to
//! the ordered list of [`Constraint`]s registered for it. The registry only
//! grows: constraints are appended and never removed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Rule, ValidationError};
use crate::validators::not_empty;

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A rule plus an optional message that replaces the rule's own failure text.
#[derive(Clone)]
pub struct Constraint {
    rule: Arc<dyn Rule>,
    message: Option<String>,
}

impl Constraint {
    /// Creates a constraint. An empty override message counts as none.
    pub fn new<R>(rule: R, message: Option<&str>) -> Self
    where
        R: Rule + 'static,
    {
        Self {
            rule: Arc::new(rule),
            message: message.filter(|m| !m.is_empty()).map(str::to_owned),
        }
    }

    /// Returns the override message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs the rule and returns the message to report on failure.
    ///
    /// The override message, when present, replaces the rule's message.
    pub fn check(&self, value: &str) -> Result<(), String> {
        self.rule.check(value).map_err(|error: ValidationError| {
            match &self.message {
                Some(message) => message.clone(),
                None => error.message.into_owned(),
            }
        })
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("rule", &"<rule>")
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// RULES
// ============================================================================

/// A set of validation rules keyed by field name.
///
/// Keys are exact and case-sensitive. Validation methods live in
/// [`crate::validation`].
///
/// # Examples
///
/// ```rust
/// use fieldcheck::Rules;
/// use fieldcheck::validators::{email, min_length};
///
/// let mut rules = Rules::new();
/// rules
///     .register_required("email", email(), Some("Enter a valid email"))
///     .register("nickname", min_length(3), None);
///
/// assert_eq!(rules.constraints("email").len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rules {
    map: HashMap<String, Vec<Constraint>>,
}

impl Rules {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a constraint for `field`.
    ///
    /// Registering the same field again adds more constraints; nothing is
    /// replaced.
    pub fn register<R>(
        &mut self,
        field: impl Into<String>,
        rule: R,
        message: Option<&str>,
    ) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.push(field.into(), Constraint::new(rule, message))
    }

    /// Registers [`not_empty`] followed by `rule`.
    ///
    /// Equivalent to two [`register`](Self::register) calls; the override
    /// message applies only to `rule`.
    pub fn register_required<R>(
        &mut self,
        field: impl Into<String>,
        rule: R,
        message: Option<&str>,
    ) -> &mut Self
    where
        R: Rule + 'static,
    {
        let field = field.into();
        self.register(field.clone(), not_empty, None);
        self.register(field, rule, message)
    }

    /// Appends an already-built constraint.
    pub fn push(&mut self, field: String, constraint: Constraint) -> &mut Self {
        tracing::trace!(field = %field, "registering constraint");
        self.map.entry(field).or_default().push(constraint);
        self
    }

    /// Returns the constraints registered for `field`, in registration order.
    pub fn constraints(&self, field: &str) -> &[Constraint] {
        self.map.get(field).map_or(&[][..], Vec::as_slice)
    }

    /// Returns true if any constraint is registered for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Iterates over registered field names, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Returns the number of fields with at least one constraint.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
