//! Core validation types and traits
//!
//! - **Traits**: [`Rule`], [`Validatable`]
//! - **Errors**: [`ValidationError`]
//! - **Fields**: [`FieldValue`]

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{FieldValue, Rule, Validatable};
