//! # fieldcheck
//!
//! Declarative field validation: register named rules per field, then
//! validate flat key/value maps or nested structures against them.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let mut rules = Rules::new();
//! rules
//!     .register_required("email", email(), Some("Enter a valid email"))
//!     .register("nickname", min_length(3), None);
//!
//! let report = rules.validate([("email", ""), ("nickname", "al")]);
//!
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.errors_for("email"),
//!     ["This value is required", "Enter a valid email"]
//! );
//! assert_eq!(report.errors_for("nickname"), ["Must be at least 3 characters"]);
//! ```
//!
//! ## Structures
//!
//! Types list their validated fields through [`Validatable`](foundation::Validatable),
//! usually via the [`validatable!`] macro. Nested fields are addressed with
//! dotted keys such as `Address.City`. `serde_json::Value` objects are
//! supported out of the box.
//!
//! ## Rule sets as data
//!
//! [`RulesConfig`] loads a registry from JSON; see [`config`].

pub mod config;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod validation;
pub mod validators;

pub use config::{ConfigError, RulesConfig};
pub use registry::{Constraint, Rules};
pub use report::{FieldReport, InvalidInput, Report};
pub use validation::{MissingFields, ValidateOptions};
