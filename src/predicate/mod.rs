//! Pure predicate primitives
//!
//! These are the boolean helpers every [`Checker`](crate::Checker) assertion
//! is built on. They never fail: each takes its inputs (absent values as
//! `None`) and answers `true` or `false`. The one exception is
//! [`string::matches`], which compiles a pattern and hands a malformed one
//! back to the caller as an error.
//!
//! The primitives are grouped by the kind of value they inspect:
//!
//! - [`null`] - cardinality of absent values
//! - [`string`] - emptiness, blankness, length and pattern matching
//! - [`collection`] - emptiness, containment and element matching
//! - [`equality`] - equality of values, strings, collections, dates and numbers
//! - [`ordering`] - ordering with tolerance
//!
//! # Example
//!
//! ```rust
//! use veritas::predicate::{collection, string};
//!
//! assert!(string::is_blank(Some(" \r\n")));
//! assert!(collection::contains_all(Some(&["x", "y"][..]), Some(&["x"][..])));
//! ```

mod combinators;

pub mod collection;
pub mod equality;
pub mod null;
pub mod ordering;
pub mod string;

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use equality::TimePoint;
pub use ordering::Magnitude;
pub use string::Pattern;
