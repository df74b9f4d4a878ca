//! Prelude module for convenient imports.
//!
//! `use fieldcheck::prelude::*;` brings in the registry, reports, traits
//! and every stock rule.

pub use crate::config::{ConfigError, RulesConfig};
pub use crate::foundation::{FieldValue, Rule, Validatable, ValidationError};
pub use crate::registry::{Constraint, Rules};
pub use crate::report::{FieldReport, InvalidInput, Report};
pub use crate::validation::{MissingFields, ValidateOptions};
pub use crate::validators::*;
pub use crate::{rule, validatable};
