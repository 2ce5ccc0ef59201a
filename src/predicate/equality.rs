//! Equality predicates
//!
//! Every equality check treats two absent values as equal and an absent
//! value as unequal to a present one.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone};
use std::fmt;

use super::ordering::{self, Magnitude};

/// A point in time that can be compared at whole-second resolution.
///
/// Implemented for zoned date-times and for civil date-times, the latter
/// being read as if they were at offset zero.
pub trait TimePoint {
    /// Whole seconds since the Unix epoch, rounded towards negative infinity.
    fn epoch_seconds(&self) -> i64;

    /// ISO-8601 rendering used in diagnostics.
    fn render(&self) -> String;
}

impl<Tz> TimePoint for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }

    fn render(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl TimePoint for NaiveDateTime {
    fn epoch_seconds(&self) -> i64 {
        self.and_utc().timestamp()
    }

    fn render(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

impl<T: TimePoint + ?Sized> TimePoint for &T {
    fn epoch_seconds(&self) -> i64 {
        (**self).epoch_seconds()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

/// Equality of two optional values.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::equality::equal;
///
/// assert!(equal(Some(1), Some(1)));
/// assert!(equal::<i32>(None, None));
/// assert!(!equal(Some(1), None));
/// ```
#[inline]
pub fn equal<T: PartialEq>(actual: Option<T>, expected: Option<T>) -> bool {
    actual == expected
}

/// Equality of two optional strings, optionally ignoring case.
///
/// Case folding is Unicode lowercase mapping, applied per character.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::equality::equal_str;
///
/// assert!(equal_str(Some("x"), Some("X"), false));
/// assert!(!equal_str(Some("x"), Some("X"), true));
/// ```
pub fn equal_str(actual: Option<&str>, expected: Option<&str>, case_sensitive: bool) -> bool {
    match (actual, expected) {
        (Some(a), Some(e)) if case_sensitive => a == e,
        (Some(a), Some(e)) => a
            .chars()
            .flat_map(char::to_lowercase)
            .eq(e.chars().flat_map(char::to_lowercase)),
        (a, e) => a.is_none() && e.is_none(),
    }
}

/// Element-wise equality of two optional collections.
#[inline]
pub fn equal_collection<T: PartialEq>(actual: Option<&[T]>, expected: Option<&[T]>) -> bool {
    actual == expected
}

/// Equality of two optional points in time within `tolerance` whole seconds.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use veritas::predicate::equality::equal_date;
///
/// let a = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
/// let b = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 1).unwrap();
/// assert!(equal_date(Some(a), Some(b), 5));
/// assert!(!equal_date(Some(a), Some(b), 0));
/// ```
pub fn equal_date<D: TimePoint>(actual: Option<D>, expected: Option<D>, tolerance: u64) -> bool {
    match (actual, expected) {
        (Some(a), Some(e)) => a.epoch_seconds().abs_diff(e.epoch_seconds()) <= tolerance,
        (a, e) => a.is_none() && e.is_none(),
    }
}

/// Equality of two numbers within `epsilon`: `|actual - expected| <= epsilon`.
///
/// A NaN on either side is never equal.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::equality::equal_with_error;
///
/// assert!(!equal_with_error(1.5, 2.5, 0.5));
/// assert!(equal_with_error(1.5, 1.75, 0.5));
/// ```
#[inline]
pub fn equal_with_error<T: Magnitude>(actual: T, expected: T, epsilon: T) -> bool {
    if actual >= expected {
        ordering::gap_within(actual, expected, epsilon)
    } else {
        expected > actual && ordering::gap_within(expected, actual, epsilon)
    }
}
