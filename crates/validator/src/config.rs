//! Declarative rule sets
//!
//! A [`RulesConfig`] describes constraints as data so a registry can be
//! loaded from JSON instead of being built in code:
//!
//! ```json
//! {
//!   "fields": {
//!     "email":        { "required": true, "rules": [{ "rule": "email", "message": "bad email" }] },
//!     "Address.City": { "required": true },
//!     "zip":          { "rules": [{ "rule": "matches", "pattern": "^[0-9]{5}$" }] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::{Constraint, Rules};
use crate::validators::{
    MatchesRegex, email, max_length, min_length, not_empty, numeric, one_of,
};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while loading a rule set.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not a valid rule set.
    #[error("invalid rule set: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `matches` rule carries a pattern that does not compile.
    #[error("field `{field}`: invalid pattern `{pattern}`")]
    InvalidPattern {
        /// Field the rule was declared on.
        field: String,
        /// The offending pattern.
        pattern: String,
        /// Compilation failure.
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// CONFIG TYPES
// ============================================================================

/// A complete rule set keyed by field name or dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Per-field declarations.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

/// Constraints declared for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Register the non-empty rule before `rules`.
    #[serde(default)]
    pub required: bool,

    /// Rules in registration order.
    #[serde(default)]
    pub rules: Vec<ConstraintConfig>,
}

/// One declared constraint.
///
/// On the wire the rule tag, its parameters and `message` share one object,
/// e.g. `{ "rule": "min_length", "min": 3, "message": "too short" }`. Any
/// other key is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaggedConstraint", into = "TaggedConstraint")]
pub struct ConstraintConfig {
    /// Which stock rule to use.
    pub rule: RuleConfig,

    /// Replaces the rule's own failure message.
    pub message: Option<String>,
}

/// The stock rules available to declarative rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConfig {
    /// [`not_empty`]
    NotEmpty,
    /// [`min_length`]
    MinLength {
        /// Minimum number of characters.
        min: usize,
    },
    /// [`max_length`]
    MaxLength {
        /// Maximum number of characters.
        max: usize,
    },
    /// [`MatchesRegex`]
    Matches {
        /// Regular expression the value must match.
        pattern: String,
    },
    /// [`email`]
    Email,
    /// [`numeric`]
    Numeric,
    /// [`one_of`]
    OneOf {
        /// Allowed values.
        values: Vec<String>,
    },
}

/// Wire form of [`ConstraintConfig`].
#[derive(Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case", deny_unknown_fields)]
enum TaggedConstraint {
    NotEmpty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Matches {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    OneOf {
        values: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl From<TaggedConstraint> for ConstraintConfig {
    fn from(tagged: TaggedConstraint) -> Self {
        let (rule, message) = match tagged {
            TaggedConstraint::NotEmpty { message } => (RuleConfig::NotEmpty, message),
            TaggedConstraint::MinLength { min, message } => (RuleConfig::MinLength { min }, message),
            TaggedConstraint::MaxLength { max, message } => (RuleConfig::MaxLength { max }, message),
            TaggedConstraint::Matches { pattern, message } => {
                (RuleConfig::Matches { pattern }, message)
            }
            TaggedConstraint::Email { message } => (RuleConfig::Email, message),
            TaggedConstraint::Numeric { message } => (RuleConfig::Numeric, message),
            TaggedConstraint::OneOf { values, message } => (RuleConfig::OneOf { values }, message),
        };
        Self { rule, message }
    }
}

impl From<ConstraintConfig> for TaggedConstraint {
    fn from(config: ConstraintConfig) -> Self {
        let message = config.message;
        match config.rule {
            RuleConfig::NotEmpty => Self::NotEmpty { message },
            RuleConfig::MinLength { min } => Self::MinLength { min, message },
            RuleConfig::MaxLength { max } => Self::MaxLength { max, message },
            RuleConfig::Matches { pattern } => Self::Matches { pattern, message },
            RuleConfig::Email => Self::Email { message },
            RuleConfig::Numeric => Self::Numeric { message },
            RuleConfig::OneOf { values } => Self::OneOf { values, message },
        }
    }
}

impl RulesConfig {
    /// Parses a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ConstraintConfig {
    fn build(&self, field: &str) -> Result<Constraint, ConfigError> {
        let message = self.message.as_deref();
        let constraint = match &self.rule {
            RuleConfig::NotEmpty => Constraint::new(not_empty, message),
            RuleConfig::MinLength { min } => Constraint::new(min_length(*min), message),
            RuleConfig::MaxLength { max } => Constraint::new(max_length(*max), message),
            RuleConfig::Matches { pattern } => {
                let rule =
                    MatchesRegex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                        field: field.to_owned(),
                        pattern: pattern.clone(),
                        source,
                    })?;
                Constraint::new(rule, message)
            }
            RuleConfig::Email => Constraint::new(email(), message),
            RuleConfig::Numeric => Constraint::new(numeric(), message),
            RuleConfig::OneOf { values } => Constraint::new(one_of(values.clone()), message),
        };
        Ok(constraint)
    }
}

// ============================================================================
// LOADING
// ============================================================================

impl Rules {
    /// Builds a registry from a rule set.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        let mut rules = Self::new();
        rules.extend_from_config(config)?;
        Ok(rules)
    }

    /// Appends the constraints of a rule set to this registry.
    ///
    /// Every constraint is built before any is registered, so a failing
    /// rule set leaves the registry unchanged.
    pub fn extend_from_config(&mut self, config: &RulesConfig) -> Result<&mut Self, ConfigError> {
        let mut built = Vec::new();
        for (field, field_config) in &config.fields {
            if field_config.required {
                built.push((field.clone(), Constraint::new(not_empty, None)));
            }
            for constraint in &field_config.rules {
                built.push((field.clone(), constraint.build(field)?));
            }
        }

        tracing::debug!(
            fields = config.fields.len(),
            constraints = built.len(),
            "loaded rule set"
        );
        for (field, constraint) in built {
            self.push(field, constraint);
        }
        Ok(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
