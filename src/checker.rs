//! The fluent accumulator
//!
//! A [`Checker`] runs a chain of assertions against one entity, recording a
//! diagnostic message for every assertion that fails instead of stopping at
//! the first. Finalizing the chain returns `Ok(())` when nothing failed, or
//! an error built from every recorded message.
//!
//! Each assertion names the expectation: `if_blank` fails when the value is
//! *not* blank, `if_not_blank` when it is. Every assertion takes an optional
//! correlation token as its last argument; a token is recorded alongside
//! the message only when the assertion fails and the token is present.
//!
//! # Example
//!
//! ```rust
//! use veritas::for_checking;
//!
//! let result = for_checking::<&str>("User")
//!     .if_not_blank("name", Some("Ada"), Some("NAME"))
//!     .if_within_max_length("name", Some("Ada Lovelace"), 5, Some("NAME_LENGTH"))
//!     .if_equal("age", Some(36), Some(36), None)
//!     .finish();
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.tokens(), &["NAME_LENGTH"]);
//! assert_eq!(
//!     err.message(),
//!     "Assertion failed for field: \"User#name\";\tExpected string[\"Ada Lovelace\"] length[12] to be within length[5]."
//! );
//! ```

use std::fmt::Display;

use crate::error::CompositeError;
use crate::message::{arg, Template};
use crate::predicate::{
    collection, equality, null, ordering, string, Magnitude, Pattern, Predicate, TimePoint,
};

/// Start a chain of assertions against `entity`.
///
/// Shorthand for [`Checker::new`].
pub fn for_checking<S>(entity: impl Into<String>) -> Checker<S> {
    Checker::new(entity)
}

/// Accumulates failed assertions about one entity
///
/// `S` is the correlation-token type. Assertions take the checker by value
/// and hand it back, so a chain reads top to bottom and a finalized checker
/// cannot be reused.
#[derive(Debug, Clone)]
pub struct Checker<S = ()> {
    entity: String,
    messages: Vec<String>,
    tokens: Vec<S>,
}

impl<S> Checker<S> {
    /// Create a checker for the entity labelled `entity`.
    pub fn new(entity: impl Into<String>) -> Self {
        Checker {
            entity: entity.into(),
            messages: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Create a checker labelled with the unqualified name of `T`.
    ///
    /// ```rust
    /// use veritas::Checker;
    ///
    /// struct Account;
    ///
    /// let checker = Checker::<()>::for_type::<Account>();
    /// assert_eq!(checker.entity(), "Account");
    /// ```
    pub fn for_type<T: ?Sized>() -> Self {
        Checker::new(short_type_name::<T>())
    }

    /// The entity label.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Messages recorded so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Tokens recorded so far, in order.
    pub fn tokens(&self) -> &[S] {
        &self.tokens
    }

    /// Number of failed assertions so far.
    pub fn failure_count(&self) -> usize {
        self.messages.len()
    }

    /// True iff no assertion has failed yet.
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    fn record<F>(
        mut self,
        failed: bool,
        template: Template,
        fields: &[&str],
        values: F,
        token: Option<S>,
    ) -> Self
    where
        F: FnOnce() -> Vec<String>,
    {
        if !failed {
            return self;
        }

        let mut args = Vec::with_capacity(1 + fields.len() + 3);
        args.push(self.entity.clone());
        args.extend(fields.iter().map(|field| field.to_string()));
        args.extend(values());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            entity = %self.entity,
            fields = ?fields,
            template = %template,
            kind = %template.kind(),
            token = token.is_some(),
            "assertion failed"
        );

        self.messages.push(template.format(&args));
        if let Some(token) = token {
            self.tokens.push(token);
        }
        self
    }

    // Nullability

    /// Fails unless `actual` is absent.
    pub fn if_null<T>(self, field: &str, actual: Option<T>, token: Option<S>) -> Self {
        let failed = !null::is_null(actual);
        self.record(failed, Template::Null, &[field], Vec::new, token)
    }

    /// Fails if `actual` is absent.
    ///
    /// ```rust
    /// use veritas::for_checking;
    ///
    /// let err = for_checking::<()>("Order")
    ///     .if_not_null("id", None::<u64>, None)
    ///     .finish()
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     err.message(),
    ///     "Assertion failed for field: \"Order#id\";\tExpected object to be non-null."
    /// );
    /// ```
    pub fn if_not_null<T>(self, field: &str, actual: Option<T>, token: Option<S>) -> Self {
        let failed = null::is_null(actual);
        self.record(failed, Template::NotNull, &[field], Vec::new, token)
    }

    /// Fails unless exactly one of the two values is absent.
    pub fn if_xor_null<T, U>(
        self,
        field1: &str,
        actual1: Option<T>,
        field2: &str,
        actual2: Option<U>,
        token: Option<S>,
    ) -> Self {
        let failed = !null::xor_null(actual1, actual2);
        self.record(failed, Template::XorNull, &[field1, field2], Vec::new, token)
    }

    /// Fails if exactly one of the two values is absent.
    ///
    /// This is the inverse of [`if_xor_null`](Self::if_xor_null): it passes
    /// when both values are absent or both are present.
    pub fn if_xor_not_null<T, U>(
        self,
        field1: &str,
        actual1: Option<T>,
        field2: &str,
        actual2: Option<U>,
        token: Option<S>,
    ) -> Self {
        let failed = null::xor_null(actual1, actual2);
        self.record(failed, Template::XorNotNull, &[field1, field2], Vec::new, token)
    }

    /// Fails unless at least one of the two values is absent.
    pub fn if_or_null<T, U>(
        self,
        field1: &str,
        actual1: Option<T>,
        field2: &str,
        actual2: Option<U>,
        token: Option<S>,
    ) -> Self {
        let failed = !null::or_null(actual1, actual2);
        self.record(failed, Template::OrNull, &[field1, field2], Vec::new, token)
    }

    /// Fails unless at least one of the two values is present.
    pub fn if_or_not_null<T, U>(
        self,
        field1: &str,
        actual1: Option<T>,
        field2: &str,
        actual2: Option<U>,
        token: Option<S>,
    ) -> Self {
        let failed = !null::or_not_null(actual1, actual2);
        self.record(failed, Template::OrNotNull, &[field1, field2], Vec::new, token)
    }

    // String shape

    /// Fails unless `actual` is absent, empty or only whitespace.
    pub fn if_blank(self, field: &str, actual: Option<&str>, token: Option<S>) -> Self {
        let failed = !string::is_blank(actual);
        self.record(failed, Template::Blank, &[field], || vec![arg::text(actual)], token)
    }

    /// Fails if `actual` is absent, empty or only whitespace.
    pub fn if_not_blank(self, field: &str, actual: Option<&str>, token: Option<S>) -> Self {
        let failed = string::is_blank(actual);
        self.record(failed, Template::NotBlank, &[field], Vec::new, token)
    }

    /// Fails unless `actual` is absent or empty.
    pub fn if_empty(self, field: &str, actual: Option<&str>, token: Option<S>) -> Self {
        let failed = !string::is_empty(actual);
        self.record(failed, Template::Empty, &[field], || vec![arg::text(actual)], token)
    }

    /// Fails if `actual` is absent or empty.
    pub fn if_not_empty(self, field: &str, actual: Option<&str>, token: Option<S>) -> Self {
        let failed = string::is_empty(actual);
        self.record(failed, Template::NotEmpty, &[field], Vec::new, token)
    }

    /// Fails unless `actual` is absent or at most `max_length` characters long.
    pub fn if_within_max_length(
        self,
        field: &str,
        actual: Option<&str>,
        max_length: usize,
        token: Option<S>,
    ) -> Self {
        let failed = !string::within_max_length(actual, max_length);
        let values = move || length_values(actual, max_length);
        self.record(failed, Template::WithinMaxLength, &[field], values, token)
    }

    /// Fails if `actual` is absent or at most `max_length` characters long.
    pub fn if_not_within_max_length(
        self,
        field: &str,
        actual: Option<&str>,
        max_length: usize,
        token: Option<S>,
    ) -> Self {
        let failed = string::within_max_length(actual, max_length);
        let values = move || length_values(actual, max_length);
        self.record(failed, Template::NotWithinMaxLength, &[field], values, token)
    }

    /// Fails unless `actual` is present and matches `pattern` in full.
    ///
    /// ```rust
    /// use veritas::{for_checking, Pattern};
    ///
    /// let date = Pattern::new(r"\d{4}-\d{2}-\d{2}")?;
    /// let checker = for_checking::<()>("Event")
    ///     .if_matches("day", Some("1984-01-23"), &date, None)
    ///     .if_matches("day", Some("23/01/1984"), &date, None);
    ///
    /// assert_eq!(checker.failure_count(), 1);
    /// assert!(checker.messages()[0].ends_with(r#"to match pattern["\d{4}-\d{2}-\d{2}"]."#));
    /// # Ok::<(), regex::Error>(())
    /// ```
    pub fn if_matches(
        self,
        field: &str,
        actual: Option<&str>,
        pattern: &Pattern,
        token: Option<S>,
    ) -> Self {
        let failed = !string::matches_pattern(actual, pattern);
        let values = || vec![arg::text(actual), pattern.to_string()];
        self.record(failed, Template::Matches, &[field], values, token)
    }

    /// Fails if `actual` is present and matches `pattern` in full.
    pub fn if_not_matches(
        self,
        field: &str,
        actual: Option<&str>,
        pattern: &Pattern,
        token: Option<S>,
    ) -> Self {
        let failed = string::matches_pattern(actual, pattern);
        let values = || vec![arg::text(actual), pattern.to_string()];
        self.record(failed, Template::NotMatches, &[field], values, token)
    }

    // Collection shape

    /// Fails unless `actual` is absent or has no elements.
    pub fn if_empty_collection<T: Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = !collection::is_empty(actual);
        self.record(failed, Template::EmptyCollection, &[field], || vec![arg::list(actual)], token)
    }

    /// Fails if `actual` is absent or has no elements.
    pub fn if_not_empty_collection<T>(
        self,
        field: &str,
        actual: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = collection::is_empty(actual);
        self.record(failed, Template::NotEmptyCollection, &[field], Vec::new, token)
    }

    /// Fails unless `actual` contains every element of `expected`.
    pub fn if_contains_all_values<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        expected: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = !collection::contains_all(actual, expected);
        let values = || vec![arg::list(actual), arg::list(expected)];
        self.record(failed, Template::ContainsAll, &[field], values, token)
    }

    /// Fails unless `actual` contains at least one element of `expected`.
    pub fn if_contains_any_values<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        expected: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = !collection::contains_any(actual, expected);
        let values = || vec![arg::list(actual), arg::list(expected)];
        self.record(failed, Template::ContainsAny, &[field], values, token)
    }

    /// Fails if `actual` contains any element of `expected`.
    pub fn if_contains_no_values<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        expected: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = !collection::contains_none(actual, expected);
        let values = || vec![arg::list(actual), arg::list(expected)];
        self.record(failed, Template::ContainsNone, &[field], values, token)
    }

    /// Fails unless `matcher` holds for every element of `actual`.
    ///
    /// An absent or empty collection, or an absent matcher, passes.
    ///
    /// ```rust
    /// use veritas::for_checking;
    ///
    /// let even = |n: &u32| n % 2 == 0;
    /// let checker = for_checking::<()>("Batch")
    ///     .if_matches_all_values("sizes", Some(&[2, 4, 5][..]), Some(even), None);
    ///
    /// assert!(checker.messages()[0].ends_with("Expected collection[[2, 4, 5]] to match all values."));
    /// ```
    pub fn if_matches_all_values<T, P>(
        self,
        field: &str,
        actual: Option<&[T]>,
        matcher: Option<P>,
        token: Option<S>,
    ) -> Self
    where
        T: Display,
        P: Predicate<T>,
    {
        let failed = !collection::matches_all(actual, matcher);
        self.record(failed, Template::MatchesAll, &[field], || vec![arg::list(actual)], token)
    }

    /// Fails unless `matcher` holds for at least one element of `actual`.
    pub fn if_matches_any_values<T, P>(
        self,
        field: &str,
        actual: Option<&[T]>,
        matcher: Option<P>,
        token: Option<S>,
    ) -> Self
    where
        T: Display,
        P: Predicate<T>,
    {
        let failed = !collection::matches_any(actual, matcher);
        self.record(failed, Template::MatchesAny, &[field], || vec![arg::list(actual)], token)
    }

    /// Fails if `matcher` holds for any element of `actual`.
    ///
    /// An absent or empty collection, or an absent matcher, fails.
    pub fn if_matches_no_values<T, P>(
        self,
        field: &str,
        actual: Option<&[T]>,
        matcher: Option<P>,
        token: Option<S>,
    ) -> Self
    where
        T: Display,
        P: Predicate<T>,
    {
        let failed = !collection::matches_none(actual, matcher);
        self.record(failed, Template::MatchesNone, &[field], || vec![arg::list(actual)], token)
    }

    // Equality

    /// Fails unless `actual` equals `expected`.
    pub fn if_equal<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<T>,
        expected: Option<T>,
        token: Option<S>,
    ) -> Self {
        let failed = !equality::equal(actual.as_ref(), expected.as_ref());
        let values = || vec![arg::value(actual), arg::value(expected)];
        self.record(failed, Template::Equal, &[field], values, token)
    }

    /// Fails if `actual` equals `expected`.
    pub fn if_not_equal<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<T>,
        expected: Option<T>,
        token: Option<S>,
    ) -> Self {
        let failed = equality::equal(actual.as_ref(), expected.as_ref());
        let values = || vec![arg::value(actual), arg::value(expected)];
        self.record(failed, Template::NotEqual, &[field], values, token)
    }

    /// Fails unless the strings are equal, ignoring case when `case_sensitive` is false.
    pub fn if_equal_str(
        self,
        field: &str,
        actual: Option<&str>,
        expected: Option<&str>,
        case_sensitive: bool,
        token: Option<S>,
    ) -> Self {
        let failed = !equality::equal_str(actual, expected, case_sensitive);
        let values = || vec![arg::text(actual), arg::text(expected)];
        self.record(failed, Template::EqualString, &[field], values, token)
    }

    /// Fails if the strings are equal, ignoring case when `case_sensitive` is false.
    pub fn if_not_equal_str(
        self,
        field: &str,
        actual: Option<&str>,
        expected: Option<&str>,
        case_sensitive: bool,
        token: Option<S>,
    ) -> Self {
        let failed = equality::equal_str(actual, expected, case_sensitive);
        let values = || vec![arg::text(actual), arg::text(expected)];
        self.record(failed, Template::NotEqualString, &[field], values, token)
    }

    /// Fails unless the collections are equal element by element.
    pub fn if_equal_collection<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        expected: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = !equality::equal_collection(actual, expected);
        let values = || vec![arg::list(actual), arg::list(expected)];
        self.record(failed, Template::Equal, &[field], values, token)
    }

    /// Fails if the collections are equal element by element.
    pub fn if_not_equal_collection<T: PartialEq + Display>(
        self,
        field: &str,
        actual: Option<&[T]>,
        expected: Option<&[T]>,
        token: Option<S>,
    ) -> Self {
        let failed = equality::equal_collection(actual, expected);
        let values = || vec![arg::list(actual), arg::list(expected)];
        self.record(failed, Template::NotEqual, &[field], values, token)
    }

    /// Fails unless the two points in time are within `tolerance` whole seconds.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use veritas::for_checking;
    ///
    /// let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 9).unwrap();
    ///
    /// let checker = for_checking::<()>("Job")
    ///     .if_equal_date("started", Some(end), Some(start), 5, None);
    ///
    /// assert!(checker.messages()[0]
    ///     .ends_with("Actual[2020-01-01T00:00:09Z]  [5 s]  Expected[2020-01-01T00:00:00Z]."));
    /// ```
    pub fn if_equal_date<D: TimePoint>(
        self,
        field: &str,
        actual: Option<D>,
        expected: Option<D>,
        tolerance: u64,
        token: Option<S>,
    ) -> Self {
        let failed = !equality::equal_date(actual.as_ref(), expected.as_ref(), tolerance);
        let values = || date_values(actual, expected, tolerance);
        self.record(failed, Template::EqualDateWithTolerance, &[field], values, token)
    }

    /// Fails if the two points in time are within `tolerance` whole seconds.
    pub fn if_not_equal_date<D: TimePoint>(
        self,
        field: &str,
        actual: Option<D>,
        expected: Option<D>,
        tolerance: u64,
        token: Option<S>,
    ) -> Self {
        let failed = equality::equal_date(actual.as_ref(), expected.as_ref(), tolerance);
        let values = || date_values(actual, expected, tolerance);
        self.record(failed, Template::NotEqualDateWithTolerance, &[field], values, token)
    }

    /// Fails unless `|actual - expected| <= epsilon`.
    pub fn if_equal_with_error<T>(
        self,
        field: &str,
        actual: T,
        expected: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = !equality::equal_with_error(actual, expected, epsilon);
        let values = || numeric_values(actual, expected, epsilon);
        self.record(failed, Template::EqualWithError, &[field], values, token)
    }

    /// Fails if `|actual - expected| <= epsilon`.
    pub fn if_not_equal_with_error<T>(
        self,
        field: &str,
        actual: T,
        expected: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = equality::equal_with_error(actual, expected, epsilon);
        let values = || numeric_values(actual, expected, epsilon);
        self.record(failed, Template::NotEqualWithError, &[field], values, token)
    }

    // Ordering

    /// Fails unless `actual - epsilon > bound`.
    pub fn if_greater_than_with_error<T>(
        self,
        field: &str,
        actual: T,
        bound: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = !ordering::greater_than_with_error(actual, bound, epsilon);
        let values = || numeric_values(actual, bound, epsilon);
        self.record(failed, Template::GreaterThanWithError, &[field], values, token)
    }

    /// Fails unless `actual + epsilon >= bound`.
    pub fn if_greater_than_or_equal_with_error<T>(
        self,
        field: &str,
        actual: T,
        bound: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = !ordering::greater_than_or_equal_with_error(actual, bound, epsilon);
        let values = || numeric_values(actual, bound, epsilon);
        self.record(failed, Template::GreaterThanOrEqualWithError, &[field], values, token)
    }

    /// Fails unless `actual + epsilon < bound`.
    pub fn if_less_than_with_error<T>(
        self,
        field: &str,
        actual: T,
        bound: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = !ordering::less_than_with_error(actual, bound, epsilon);
        let values = || numeric_values(actual, bound, epsilon);
        self.record(failed, Template::LessThanWithError, &[field], values, token)
    }

    /// Fails unless `actual - epsilon <= bound`.
    pub fn if_less_than_or_equal_with_error<T>(
        self,
        field: &str,
        actual: T,
        bound: T,
        epsilon: T,
        token: Option<S>,
    ) -> Self
    where
        T: Magnitude + Display,
    {
        let failed = !ordering::less_than_or_equal_with_error(actual, bound, epsilon);
        let values = || numeric_values(actual, bound, epsilon);
        self.record(failed, Template::LessThanOrEqualWithError, &[field], values, token)
    }

    // Finalize

    /// Finish the chain, building the error from the recorded messages
    ///
    /// Returns `Ok(())` when no assertion failed; `ctor` is then never called.
    ///
    /// ```rust
    /// use veritas::{for_checking, AssertionError};
    ///
    /// let result = for_checking::<()>("User")
    ///     .if_not_empty("email", Some(""), None)
    ///     .throwing(|messages| AssertionError::new(messages.join("; ")));
    ///
    /// assert!(result.unwrap_err().message().ends_with("Expected string to not be empty, or null."));
    /// ```
    pub fn throwing<E, F>(self, ctor: F) -> Result<(), E>
    where
        F: FnOnce(Vec<String>) -> E,
    {
        if self.is_clean() {
            return Ok(());
        }
        self.trace_raise();
        Err(ctor(self.messages))
    }

    /// Finish the chain, building the error from the recorded messages and tokens.
    pub fn throwing_with_tokens<E, F>(self, ctor: F) -> Result<(), E>
    where
        F: FnOnce(Vec<String>, Vec<S>) -> E,
    {
        if self.is_clean() {
            return Ok(());
        }
        self.trace_raise();
        Err(ctor(self.messages, self.tokens))
    }

    /// Finish the chain with a [`CompositeError`] carrying messages and tokens.
    pub fn finish(self) -> Result<(), CompositeError<S>> {
        self.throwing_with_tokens(CompositeError::with_tokens)
    }

    #[inline]
    fn trace_raise(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            entity = %self.entity,
            failures = self.messages.len(),
            tokens = self.tokens.len(),
            "check failed"
        );
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn length_values(actual: Option<&str>, max_length: usize) -> Vec<String> {
    let length = actual.map_or(0, |s| s.chars().count());
    vec![arg::text(actual), length.to_string(), max_length.to_string()]
}

fn date_values<D: TimePoint>(actual: Option<D>, expected: Option<D>, tolerance: u64) -> Vec<String> {
    vec![arg::time(actual), arg::time(expected), tolerance.to_string()]
}

fn numeric_values<T: Display>(actual: T, expected: T, epsilon: T) -> Vec<String> {
    vec![actual.to_string(), expected.to_string(), epsilon.to_string()]
}
