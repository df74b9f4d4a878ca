//! Built-in rules
//!
//! Every rule here checks a single string value:
//!
//! - **Length**: [`not_empty`], [`MinLength`], [`MaxLength`]
//! - **Content**: [`MatchesRegex`], [`Email`]
//! - **Pattern**: [`Numeric`], [`OneOf`], [`Predicate`]

pub mod content;
pub mod length;
pub mod pattern;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{MaxLength, MinLength, max_length, min_length, not_empty};
pub use pattern::{Numeric, OneOf, Predicate, numeric, one_of, predicate};
