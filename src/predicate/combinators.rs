//! Matcher trait and logical combinators
//!
//! The `matches_*` family of collection checks takes a caller-supplied
//! matcher. Any `Fn(&T) -> bool` closure is a matcher; the combinators in
//! this module let matchers be composed before they are handed over.

/// A matcher over values of type T.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::{Predicate, PredicateExt};
///
/// let short = |s: &&str| s.len() < 4;
/// let lower = |s: &&str| s.chars().all(char::is_lowercase);
/// let p = short.and(lower);
///
/// assert!(p.check(&"abc"));
/// assert!(!p.check(&"ABC"));
/// assert!(!p.check(&"abcdef"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so a composed matcher costs no more
/// than the closures it is built from.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritas::predicate::{Predicate, PredicateExt};
    ///
    /// let p = (|n: &i32| *n > 0).and(|n: &i32| *n < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritas::predicate::{Predicate, PredicateExt};
    ///
    /// let p = (|n: &i32| *n < 0).or(|n: &i32| *n > 100);
    /// assert!(p.check(&-5));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritas::predicate::{Predicate, PredicateExt};
    ///
    /// let p = (|n: &i32| *n > 0).not();
    /// assert!(p.check(&0));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Matcher that accepts an element only when both inner matchers accept it.
///
/// The second matcher is not consulted for elements the first rejects.
#[derive(Clone, Copy, Debug)]
pub struct And<First, Second>(pub First, pub Second);

impl<T, First, Second> Predicate<T> for And<First, Second>
where
    T: ?Sized,
    First: Predicate<T>,
    Second: Predicate<T>,
{
    #[inline]
    fn check(&self, element: &T) -> bool {
        let And(first, second) = self;
        first.check(element) && second.check(element)
    }
}

/// Matcher that accepts an element when either inner matcher accepts it.
///
/// The second matcher is not consulted for elements the first accepts.
#[derive(Clone, Copy, Debug)]
pub struct Or<First, Second>(pub First, pub Second);

impl<T, First, Second> Predicate<T> for Or<First, Second>
where
    T: ?Sized,
    First: Predicate<T>,
    Second: Predicate<T>,
{
    #[inline]
    fn check(&self, element: &T) -> bool {
        let Or(first, second) = self;
        first.check(element) || second.check(element)
    }
}

/// Matcher that accepts exactly the elements its inner matcher rejects.
#[derive(Clone, Copy, Debug)]
pub struct Not<Inner>(pub Inner);

impl<T: ?Sized, Inner: Predicate<T>> Predicate<T> for Not<Inner> {
    #[inline]
    fn check(&self, element: &T) -> bool {
        !self.0.check(element)
    }
}
