//! End-to-end checks through the public API

use chrono::{DateTime, Utc};
use veritas::{assert_tokens, assert_verified, assert_violations};
use veritas::{for_checking, Checker, CompositeError, Pattern};

struct VerifierTest;

const TOKEN1: i64 = 123;
const TOKEN2: i64 = 234;
const TOKEN3: i64 = 345;

fn verifier() -> Checker<i64> {
    Checker::for_type::<VerifierTest>()
}

fn failure(result: Result<(), CompositeError<i64>>) -> CompositeError<i64> {
    match result {
        Err(err) => err,
        Ok(()) => panic!("Expected the check to fail"),
    }
}

#[test]
fn test_blank_failure_with_token() {
    let err = failure(verifier().if_blank("testField1", Some("xxx"), Some(TOKEN1)).finish());

    assert_eq!(
        err.message(),
        "Assertion failed for field: \"VerifierTest#testField1\";\tExpected string[\"xxx\"] to be blank, empty, or null."
    );
    assert_eq!(err.tokens(), &[TOKEN1]);
}

#[test]
fn test_contains_all_failure_with_token() {
    let err = failure(
        verifier()
            .if_contains_all_values("testField1", Some(&["z"][..]), Some(&["x", "y"][..]), Some(TOKEN1))
            .finish(),
    );

    assert_eq!(
        err.message(),
        "Assertion failed for field: \"VerifierTest#testField1\";\tExpected collection[[z]] to contain all values of collection[[x, y]]."
    );
    assert_eq!(err.tokens(), &[TOKEN1]);
}

#[test]
fn test_not_null_failure_with_token() {
    let err = failure(verifier().if_not_null("testField", None::<String>, Some(TOKEN1)).finish());

    assert_eq!(
        err.message(),
        "Assertion failed for field: \"VerifierTest#testField\";\tExpected object to be non-null."
    );
    assert_eq!(err.tokens(), &[TOKEN1]);
}

#[test]
fn test_two_equality_failures_are_joined() {
    let err = failure(
        verifier()
            .if_equal("testField1", Some(true), Some(false), Some(TOKEN1))
            .if_equal("testField2", Some(false), Some(true), Some(TOKEN2))
            .finish(),
    );

    assert_eq!(
        err.message(),
        "Assertion failed for field: \"VerifierTest#testField1\";\tActual[true]  Expected[false].\n\
         Assertion failed for field: \"VerifierTest#testField2\";\tActual[false]  Expected[true]."
    );
    assert_eq!(err.tokens(), &[TOKEN1, TOKEN2]);
}

#[test]
fn test_or_null_failure_names_both_fields() {
    let err = failure(
        verifier()
            .if_or_null("testField1", Some(""), "testField2", Some(""), Some(TOKEN1))
            .finish(),
    );

    assert_eq!(
        err.message(),
        "Assertion failed for fields: \"VerifierTest#testField1\" and \"VerifierTest#testField2\";\tExpected either object to be null."
    );
    assert_eq!(err.tokens(), &[TOKEN1]);
}

#[test]
fn test_passing_chain_returns_ok() {
    let result = verifier()
        .if_not_blank("testField1", Some("xxx"), Some(TOKEN1))
        .if_equal("testField2", Some(1), Some(1), Some(TOKEN2))
        .if_contains_any_values("testField3", Some(&[1, 2][..]), Some(&[2][..]), Some(TOKEN3))
        .finish();

    assert!(result.is_ok());
}

#[test]
fn test_not_blank_failures_keep_order() {
    let err = failure(
        verifier()
            .if_not_blank("testField1", None, Some(TOKEN1))
            .if_not_blank("testField2", Some(""), Some(TOKEN2))
            .if_not_blank("testField3", Some(" "), Some(TOKEN3))
            .finish(),
    );

    assert_violations!(
        err,
        [
            "Assertion failed for field: \"VerifierTest#testField1\";\tExpected string to not be blank, empty, or null.",
            "Assertion failed for field: \"VerifierTest#testField2\";\tExpected string to not be blank, empty, or null.",
            "Assertion failed for field: \"VerifierTest#testField3\";\tExpected string to not be blank, empty, or null.",
        ]
    );
    assert_tokens!(err, [TOKEN1, TOKEN2, TOKEN3]);
}

#[test]
fn test_pattern_failures_show_source_text() {
    let date = Pattern::new(r"\d{4}-\d{2}-\d{2}").unwrap();

    let err = failure(
        verifier()
            .if_matches("testField1", Some("1984-Jan-23"), &date, Some(TOKEN1))
            .if_not_matches("testField2", Some("1984-01-23"), &date, None)
            .finish(),
    );

    assert_violations!(
        err,
        [
            "Assertion failed for field: \"VerifierTest#testField1\";\tExpected string[\"1984-Jan-23\"] to match pattern[\"\\d{4}-\\d{2}-\\d{2}\"].",
            "Assertion failed for field: \"VerifierTest#testField2\";\tExpected string[\"1984-01-23\"] to not match pattern[\"\\d{4}-\\d{2}-\\d{2}\"].",
        ]
    );
    assert_tokens!(err, [TOKEN1]);
}

#[test]
fn test_bad_pattern_is_rejected_before_checking() {
    assert!(Pattern::new("(").is_err());
    assert!("[a-".parse::<Pattern>().is_err());
}

#[test]
fn test_date_tolerance_end_to_end() {
    let a = DateTime::<Utc>::from_timestamp(1_000, 0).unwrap();
    let b = DateTime::<Utc>::from_timestamp(1_001, 0).unwrap();

    let checker = verifier()
        .if_equal_date("testField1", Some(a), Some(b), 5, Some(TOKEN1))
        .if_equal_date("testField2", Some(a), Some(b), 0, Some(TOKEN2));

    assert_tokens!(checker, [TOKEN2]);
    assert_eq!(
        checker.messages()[0],
        "Assertion failed for field: \"VerifierTest#testField2\";\tActual[1970-01-01T00:16:40Z]  [0 s]  Expected[1970-01-01T00:16:41Z]."
    );
}

#[test]
fn test_custom_error_constructor() {
    #[derive(Debug)]
    struct InvalidCustomer {
        messages: Vec<String>,
        codes: Vec<&'static str>,
    }

    let result = for_checking::<&'static str>("Customer")
        .if_not_empty("email", None, Some("EMAIL"))
        .if_within_max_length("name", Some("Augusta Ada King"), 10, Some("NAME"))
        .throwing_with_tokens(|messages, codes| InvalidCustomer { messages, codes });

    let err = result.unwrap_err();
    assert_eq!(err.codes, vec!["EMAIL", "NAME"]);
    assert_eq!(
        err.messages[1],
        "Assertion failed for field: \"Customer#name\";\tExpected string[\"Augusta Ada King\"] length[16] to be within length[10]."
    );
}

#[test]
fn test_clean_chain_passes_assertion_macros() {
    let checker = for_checking::<()>("Customer")
        .if_empty_collection::<u8>("orders", None, None)
        .if_xor_null("phone", Some("555"), "email", None::<&str>, None);

    assert_verified!(checker);
    assert_eq!(checker.failure_count(), 0);
}
