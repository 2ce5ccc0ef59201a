//! Nullability predicates
//!
//! Absence is modelled as `Option::None`. The two-value predicates accept
//! options of different types because the fields they compare rarely share
//! one.

/// True iff the value is absent.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::null::is_null;
///
/// assert!(is_null::<i32>(None));
/// assert!(!is_null(Some(1)));
/// ```
#[inline]
pub fn is_null<T>(actual: Option<T>) -> bool {
    actual.is_none()
}

/// True iff exactly one of the values is absent.
#[inline]
pub fn xor_null<T, U>(actual1: Option<T>, actual2: Option<U>) -> bool {
    actual1.is_none() ^ actual2.is_none()
}

/// True iff at least one of the values is absent.
#[inline]
pub fn or_null<T, U>(actual1: Option<T>, actual2: Option<U>) -> bool {
    actual1.is_none() || actual2.is_none()
}

/// True iff at least one of the values is present.
#[inline]
pub fn or_not_null<T, U>(actual1: Option<T>, actual2: Option<U>) -> bool {
    actual1.is_some() || actual2.is_some()
}
