//! Macros for declaring rules and validated structures with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a stock rule (struct + `Rule` impl + factory fn)
//! - [`validatable!`] — Implement `Validatable` for a struct by listing its fields
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::{rule, validatable};
//! use fieldcheck::foundation::{Rule, ValidationError};
//!
//! rule! {
//!     /// Rejects values containing whitespace.
//!     pub NoWhitespace;
//!     check(input) { !input.chars().any(char::is_whitespace) }
//!     error(input) { ValidationError::new("no_whitespace", "Must not contain whitespace") }
//!     fn no_whitespace();
//! }
//!
//! struct Address { city: String }
//! struct Person { name: String, address: Address }
//!
//! validatable!(Address { city as "City" });
//! validatable!(Person { name; nested address as "Address" });
//!
//! assert!(no_whitespace().check("alice").is_ok());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete stock rule: struct definition, `Rule` implementation
/// and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Numeric;
///     check(input) { input.bytes().all(|b| b.is_ascii_digit()) }
///     error(input) { ValidationError::new("numeric", "Must be a number") }
///     fn numeric();
/// }
/// ```
///
/// **Rule with fields** (constructor from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize };
///     check(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn check(&self, $inp: &str) -> Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Rule with fields + factory fn ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident : $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($arg:ident : $aty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn check(&$self_, $inp: &str) -> Result<(), $crate::foundation::ValidationError> {
                if $check {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($arg: $aty),*) -> $name {
            $name::new($($arg),*)
        }
    };
}

// ============================================================================
// VALIDATABLE MACRO
// ============================================================================

/// Implements [`Validatable`](crate::foundation::Validatable) for a struct.
///
/// Text fields (anything `AsRef<str>`) come first, then `nested` fields
/// that themselves implement `Validatable`. A field's key is its Rust name
/// unless renamed with `as "Key"`.
///
/// ```rust,ignore
/// validatable!(Signup {
///     email,
///     display_name as "DisplayName";
///     nested address as "Address",
/// });
/// ```
#[macro_export]
macro_rules! validatable {
    (@key $field:ident) => {
        ::std::stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };

    (
        $ty:ty {
            $($field:ident $(as $key:literal)?),* $(,)?
            $(; nested $($nested:ident $(as $nkey:literal)?),* $(,)?)?
        }
    ) => {
        impl $crate::foundation::Validatable for $ty {
            fn fields(&self) -> ::std::vec::Vec<(&str, $crate::foundation::FieldValue<'_>)> {
                ::std::vec![
                    $((
                        $crate::validatable!(@key $field $($key)?),
                        $crate::foundation::FieldValue::Text(
                            ::std::convert::AsRef::<str>::as_ref(&self.$field),
                        ),
                    ),)*
                    $($((
                        $crate::validatable!(@key $nested $($nkey)?),
                        $crate::foundation::FieldValue::Nested(&self.$nested),
                    ),)*)?
                ]
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
