//! Assertion macros for tests
//!
//! The macros accept anything with `messages()` and `tokens()` accessors,
//! which covers both a [`Checker`](crate::Checker) in mid-chain and a
//! finished [`CompositeError`](crate::CompositeError).
//!
//! # Examples
//!
//! ```rust
//! use veritas::{assert_tokens, assert_verified, assert_violations, for_checking};
//!
//! let clean = for_checking::<u8>("User").if_not_blank("name", Some("Ada"), Some(1));
//! assert_verified!(clean);
//!
//! let failed = for_checking::<u8>("User").if_not_blank("name", Some(""), Some(1));
//! assert_violations!(
//!     failed,
//!     ["Assertion failed for field: \"User#name\";\tExpected string to not be blank, empty, or null."]
//! );
//! assert_tokens!(failed, [1u8]);
//! ```

/// Assert that no assertion has failed.
///
/// # Example
///
/// ```rust
/// use veritas::{assert_verified, for_checking};
///
/// let checker = for_checking::<()>("Order").if_null("cancelled_at", None::<u64>, None);
/// assert_verified!(checker);
/// ```
#[macro_export]
macro_rules! assert_verified {
    ($subject:expr) => {{
        let subject = &$subject;
        if !subject.messages().is_empty() {
            panic!("Expected no failures, got: {:?}", subject.messages());
        }
    }};
}

/// Assert that exactly the given messages were recorded, in order.
///
/// # Example
///
/// ```rust
/// use veritas::{assert_violations, for_checking};
///
/// let checker = for_checking::<()>("Order").if_not_null("id", None::<u64>, None);
/// assert_violations!(
///     checker,
///     ["Assertion failed for field: \"Order#id\";\tExpected object to be non-null."]
/// );
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($subject:expr, $expected:expr) => {{
        let subject = &$subject;
        let actual: Vec<&str> = subject.messages().iter().map(String::as_str).collect();
        let source = &$expected;
        let expected: Vec<&str> = source
            .iter()
            .map(|message| ::std::convert::AsRef::<str>::as_ref(message))
            .collect();
        if actual.is_empty() {
            panic!("Expected failures {:?}, got none", expected);
        }
        assert_eq!(actual, expected);
    }};
}

/// Assert that exactly the given tokens were recorded, in order.
///
/// # Example
///
/// ```rust
/// use veritas::{assert_tokens, for_checking};
///
/// let checker = for_checking::<&str>("Order")
///     .if_not_null("id", None::<u64>, Some("ID"))
///     .if_not_null("total", None::<u64>, None);
/// assert_tokens!(checker, ["ID"]);
/// ```
#[macro_export]
macro_rules! assert_tokens {
    ($subject:expr, $expected:expr) => {{
        let subject = &$subject;
        let expected: Vec<_> = $expected.into_iter().collect();
        assert_eq!(subject.tokens(), expected.as_slice());
    }};
}

#[cfg(test)]
mod tests {
    use crate::{for_checking, Checker, CompositeError};

    fn failing() -> Checker<u32> {
        for_checking("Test")
            .if_null("a", Some(1), Some(7))
            .if_null("b", Some(2), None)
    }

    #[test]
    fn assert_verified_macro() {
        let checker = for_checking::<u32>("Test").if_null("a", None::<u8>, Some(1));
        assert_verified!(checker);
    }

    #[test]
    fn assert_violations_macro() {
        assert_violations!(
            failing(),
            vec![
                "Assertion failed for field: \"Test#a\";\tExpected object to be null.",
                "Assertion failed for field: \"Test#b\";\tExpected object to be null.",
            ]
        );
    }

    #[test]
    fn assert_violations_accepts_owned_strings() {
        let err = failing().finish().unwrap_err();
        let expected: Vec<String> = err.messages().to_vec();
        assert_violations!(err, expected);
    }

    #[test]
    fn assert_tokens_macro() {
        assert_tokens!(failing(), [7u32]);

        let err: CompositeError<u32> = failing().finish().unwrap_err();
        assert_tokens!(err, vec![7u32]);
    }

    #[test]
    #[should_panic(expected = "Expected no failures, got")]
    fn assert_verified_panics_on_failure() {
        assert_verified!(failing());
    }

    #[test]
    #[should_panic(expected = "Expected failures")]
    fn assert_violations_panics_when_clean() {
        let checker = for_checking::<u32>("Test");
        assert_violations!(checker, ["anything"]);
    }

    #[test]
    #[should_panic]
    fn assert_tokens_panics_on_mismatch() {
        assert_tokens!(failing(), [8u32]);
    }
}
