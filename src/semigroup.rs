//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. It is how
//! failures from independent checks are folded into one: combining two
//! [`CompositeError`]s concatenates their messages, tokens and suppressed
//! causes in order.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use veritas::{for_checking, Semigroup};
//!
//! let names = for_checking::<u32>("User")
//!     .if_blank("name", Some("x"), Some(1))
//!     .finish();
//! let ages = for_checking::<u32>("User")
//!     .if_greater_than_with_error("age", 100.0, 150.0, 0.0, Some(2))
//!     .finish();
//!
//! let combined = match (names, ages) {
//!     (Err(a), Err(b)) => a.combine(b),
//!     _ => unreachable!(),
//! };
//! assert_eq!(combined.messages().len(), 2);
//! assert_eq!(combined.tokens(), &[1, 2]);
//! ```

use crate::error::CompositeError;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use veritas::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// let result = v1.combine(v2);
    /// assert_eq!(result, vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<S> Semigroup for CompositeError<S> {
    fn combine(self, other: Self) -> Self {
        let (messages, tokens, suppressed) = self.into_parts();
        let (other_messages, other_tokens, other_suppressed) = other.into_parts();

        let mut combined = CompositeError::with_tokens(
            messages.combine(other_messages),
            tokens.combine(other_tokens),
        );
        combined.attach(suppressed.combine(other_suppressed));
        combined
    }
}
