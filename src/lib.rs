//! # Veritas
//!
//! Fluent field validation that reports every failure at once.
//!
//! A [`Checker`] runs a chain of assertions against one entity. Instead of
//! stopping at the first failed assertion it records a diagnostic message
//! (and, optionally, a caller-chosen correlation token) for each one, and
//! hands them all back when the chain is finished.
//!
//! ## Quick Example
//!
//! ```rust
//! use veritas::{for_checking, Pattern};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Code {
//!     NameMissing,
//!     NameTooLong,
//!     BadZip,
//! }
//!
//! let zip = Pattern::new(r"\d{5}")?;
//!
//! let result = for_checking::<Code>("Customer")
//!     .if_not_blank("name", Some("Grace Hopper"), Some(Code::NameMissing))
//!     .if_within_max_length("name", Some("Grace Hopper"), 8, Some(Code::NameTooLong))
//!     .if_matches("zip", Some("2020A"), &zip, Some(Code::BadZip))
//!     .finish();
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.tokens(), &[Code::NameTooLong, Code::BadZip]);
//! assert_eq!(err.messages().len(), 2);
//! assert_eq!(
//!     err.messages()[1],
//!     "Assertion failed for field: \"Customer#zip\";\tExpected string[\"2020A\"] to match pattern[\"\\d{5}\"]."
//! );
//! # Ok::<(), regex::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`predicate`] - pure boolean checks every assertion is built on
//! - [`message`] - the closed set of diagnostic templates and their formatter
//! - [`checker`] - the accumulator
//! - [`error`] - [`CompositeError`] and [`AssertionError`]
//!
//! ## Features
//!
//! - `tracing` - emit a `trace` event for each failed assertion and a
//!   `debug` event when a chain finishes with failures
//! - `serde` - `Serialize` for [`CompositeError`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checker;
pub mod error;
pub mod message;
pub mod predicate;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use checker::{for_checking, Checker};
pub use error::{AssertionError, CompositeError};
pub use message::{FailureKind, Template};
pub use predicate::Pattern;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checker::{for_checking, Checker};
    pub use crate::error::{AssertionError, CompositeError};
    pub use crate::predicate::{Magnitude, Pattern, Predicate, PredicateExt, TimePoint};
    pub use crate::semigroup::Semigroup;
}
