//! Collection predicates
//!
//! Collections are slices; absence and zero length are treated alike. The
//! containment and matching families resolve their degenerate cases before
//! looking at any element:
//!
//! | `actual` | `expected` / matcher | `contains_all` / `contains_any` | `matches_all` / `matches_any` |
//! |---|---|---|---|
//! | empty | empty | true | true |
//! | empty | non-empty | false | true |
//! | non-empty | empty / absent | true | true |

use super::combinators::Predicate;

/// True iff the collection is absent or has no elements.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::collection::is_empty;
///
/// assert!(is_empty::<i32>(None));
/// assert!(is_empty::<i32>(Some(&[][..])));
/// assert!(!is_empty(Some(&[1][..])));
/// ```
#[inline]
pub fn is_empty<T>(actual: Option<&[T]>) -> bool {
    actual.is_none_or(<[T]>::is_empty)
}

/// True iff every element of `expected` appears in `actual`.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::collection::contains_all;
///
/// let none: &[&str] = &[];
/// assert!(contains_all(Some(&["x", "y"][..]), Some(&["x"][..])));
/// assert!(!contains_all(Some(&["z"][..]), Some(&["x", "y"][..])));
/// assert!(contains_all(Some(none), Some(none)));
/// assert!(!contains_all(Some(none), Some(&["x"][..])));
/// assert!(contains_all(Some(&["x"][..]), Some(none)));
/// ```
pub fn contains_all<T: PartialEq>(actual: Option<&[T]>, expected: Option<&[T]>) -> bool {
    match (actual, expected) {
        (a, e) if is_empty(a) => is_empty(e),
        (_, e) if is_empty(e) => true,
        (Some(a), Some(e)) => e.iter().all(|v| a.contains(v)),
        _ => true,
    }
}

/// True iff at least one element of `expected` appears in `actual`.
///
/// Empty inputs follow the same rules as [`contains_all`].
pub fn contains_any<T: PartialEq>(actual: Option<&[T]>, expected: Option<&[T]>) -> bool {
    match (actual, expected) {
        (a, e) if is_empty(a) => is_empty(e),
        (_, e) if is_empty(e) => true,
        (Some(a), Some(e)) => a.iter().any(|v| e.contains(v)),
        _ => true,
    }
}

/// Negation of [`contains_any`].
#[inline]
pub fn contains_none<T: PartialEq>(actual: Option<&[T]>, expected: Option<&[T]>) -> bool {
    !contains_any(actual, expected)
}

/// True iff `matcher` holds for every element.
///
/// An empty collection or an absent matcher is vacuously true.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::collection::matches_all;
///
/// let positive = |n: &i32| *n > 0;
/// assert!(matches_all(Some(&[1, 2, 3][..]), Some(positive)));
/// assert!(!matches_all(Some(&[1, -2, 3][..]), Some(positive)));
/// ```
pub fn matches_all<T, P: Predicate<T>>(actual: Option<&[T]>, matcher: Option<P>) -> bool {
    match (actual, matcher) {
        (Some(a), Some(p)) if !a.is_empty() => a.iter().all(|v| p.check(v)),
        _ => true,
    }
}

/// True iff `matcher` holds for at least one element.
///
/// An empty collection or an absent matcher is true.
pub fn matches_any<T, P: Predicate<T>>(actual: Option<&[T]>, matcher: Option<P>) -> bool {
    match (actual, matcher) {
        (Some(a), Some(p)) if !a.is_empty() => a.iter().any(|v| p.check(v)),
        _ => true,
    }
}

/// Negation of [`matches_any`].
///
/// Because `matches_any` is true for an empty collection, this is false for
/// one.
#[inline]
pub fn matches_none<T, P: Predicate<T>>(actual: Option<&[T]>, matcher: Option<P>) -> bool {
    !matches_any(actual, matcher)
}
