//! Failure types raised by a [`Checker`](crate::Checker)
//!
//! [`CompositeError`] is the aggregate failure: an ordered list of
//! diagnostic messages, the correlation tokens recorded alongside them,
//! and optionally nested failures attached as suppressed causes.
//! [`AssertionError`] is a single failed assertion with an optional source.
//!
//! # Examples
//!
//! ```
//! use veritas::CompositeError;
//!
//! let err = CompositeError::with_tokens(
//!     vec!["first".to_string(), "second".to_string()],
//!     vec![123, 234],
//! );
//!
//! assert_eq!(err.message(), "first\nsecond");
//! assert_eq!(err.tokens(), &[123, 234]);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A nested failure carried by a [`CompositeError`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Separator placed between messages in [`CompositeError::message`].
pub const SEPARATOR: &str = "\n";

/// An aggregate failure made of every message a check recorded
///
/// `S` is the correlation-token type. Tokens are kept in the order they
/// were recorded and never outnumber the messages.
///
/// # Examples
///
/// ```
/// use veritas::CompositeError;
///
/// let err: CompositeError = CompositeError::new(["name is blank", "age is negative"]);
/// assert_eq!(err.to_string(), "name is blank\nage is negative");
/// assert!(err.tokens().is_empty());
/// ```
#[derive(Debug)]
pub struct CompositeError<S = ()> {
    messages: Vec<String>,
    tokens: Vec<S>,
    suppressed: Vec<Cause>,
}

impl<S> CompositeError<S> {
    /// Create a composite failure from messages alone.
    pub fn new<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        CompositeError {
            messages: messages.into_iter().map(Into::into).collect(),
            tokens: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    /// Create a composite failure from messages and their correlation tokens.
    pub fn with_tokens(messages: Vec<String>, tokens: Vec<S>) -> Self {
        CompositeError {
            messages,
            tokens,
            suppressed: Vec::new(),
        }
    }

    /// Create a composite failure from message/cause pairs
    ///
    /// Each cause is attached as a suppressed failure, in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use veritas::{AssertionError, CompositeError};
    ///
    /// let err: CompositeError = CompositeError::from_causes([
    ///     ("x failed", AssertionError::new("x")),
    ///     ("y failed", AssertionError::new("y")),
    /// ]);
    ///
    /// assert_eq!(err.message(), "x failed\ny failed");
    /// assert_eq!(err.suppressed().len(), 2);
    /// assert_eq!(err.suppressed()[1].to_string(), "y");
    /// ```
    pub fn from_causes<I, M, C>(causes: I) -> Self
    where
        I: IntoIterator<Item = (M, C)>,
        M: Into<String>,
        C: Into<Cause>,
    {
        let (messages, suppressed) = causes
            .into_iter()
            .map(|(message, cause)| (message.into(), cause.into()))
            .unzip();

        CompositeError {
            messages,
            tokens: Vec::new(),
            suppressed,
        }
    }

    /// The messages joined with [`SEPARATOR`].
    pub fn message(&self) -> String {
        self.messages.join(SEPARATOR)
    }

    /// The individual messages, in recording order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The correlation tokens, in recording order.
    pub fn tokens(&self) -> &[S] {
        &self.tokens
    }

    /// Failures attached as suppressed causes.
    pub fn suppressed(&self) -> &[Cause] {
        &self.suppressed
    }

    /// Attach further failures as suppressed causes.
    pub fn attach(&mut self, causes: impl IntoIterator<Item = Cause>) {
        self.suppressed.extend(causes);
    }

    /// Consume the failure, returning messages, tokens and suppressed causes.
    pub fn into_parts(self) -> (Vec<String>, Vec<S>, Vec<Cause>) {
        (self.messages, self.tokens, self.suppressed)
    }

    /// Merge two composites into one whose two messages are their joined messages
    ///
    /// Tokens are not carried over.
    ///
    /// # Examples
    ///
    /// ```
    /// use veritas::CompositeError;
    ///
    /// let a: CompositeError = CompositeError::new(["a1", "a2"]);
    /// let b: CompositeError = CompositeError::new(["b1"]);
    ///
    /// let merged = a.merger(&b);
    /// assert_eq!(merged.messages(), &["a1\na2", "b1"]);
    /// ```
    pub fn merger(&self, other: &Self) -> Self {
        CompositeError::new([self.message(), other.message()])
    }
}

impl<S> CompositeError<S>
where
    S: fmt::Debug + Send + Sync + 'static,
{
    /// Like [`merger`](Self::merger), also keeping both originals as suppressed causes.
    pub fn merger_with_causes(self, other: Self) -> Self {
        let messages = vec![self.message(), other.message()];
        CompositeError {
            messages,
            tokens: Vec::new(),
            suppressed: vec![Box::new(self) as Cause, Box::new(other)],
        }
    }
}

impl<S> fmt::Display for CompositeError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.messages.iter();
        if let Some(first) = messages.next() {
            f.write_str(first)?;
        }
        for message in messages {
            write!(f, "{}{}", SEPARATOR, message)?;
        }
        Ok(())
    }
}

impl<S: fmt::Debug> StdError for CompositeError<S> {}

#[cfg(feature = "serde")]
impl<S: serde::Serialize> serde::Serialize for CompositeError<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CompositeError", 2)?;
        state.serialize_field("messages", &self.messages)?;
        state.serialize_field("tokens", &self.tokens)?;
        state.end()
    }
}

/// A single failed assertion
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use veritas::AssertionError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let err = AssertionError::with_source("config must exist", io);
///
/// assert_eq!(err.to_string(), "config must exist");
/// assert!(err.source().is_some());
/// ```
#[derive(Debug)]
pub struct AssertionError {
    message: String,
    source: Option<Cause>,
}

impl AssertionError {
    /// Create an assertion failure with no source.
    pub fn new(message: impl Into<String>) -> Self {
        AssertionError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an assertion failure caused by another error.
    pub fn with_source(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        AssertionError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for AssertionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_new_has_no_tokens() {
        let err: CompositeError<i32> = CompositeError::new(["a", "b"]);
        assert_eq!(err.messages(), &["a", "b"]);
        assert!(err.tokens().is_empty());
        assert!(err.suppressed().is_empty());
    }

    #[test]
    fn test_with_tokens_keeps_order() {
        let err = CompositeError::with_tokens(strings(&["a", "b"]), vec![2, 1]);
        assert_eq!(err.tokens(), &[2, 1]);
        assert_eq!(err.message(), "a\nb");
    }

    #[test]
    fn test_display_matches_message() {
        let err: CompositeError = CompositeError::new(["one", "two", "three"]);
        assert_eq!(format!("{}", err), err.message());

        let empty: CompositeError = CompositeError::new(Vec::<String>::new());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_single_message_has_no_separator() {
        let err: CompositeError = CompositeError::new(["only"]);
        assert_eq!(err.to_string(), "only");
    }

    #[test]
    fn test_into_parts() {
        let err = CompositeError::with_tokens(strings(&["a"]), vec!["t"]);
        let (messages, tokens, suppressed) = err.into_parts();
        assert_eq!(messages, vec!["a"]);
        assert_eq!(tokens, vec!["t"]);
        assert!(suppressed.is_empty());
    }

    #[test]
    fn test_merger_drops_tokens() {
        let a = CompositeError::with_tokens(strings(&["a1", "a2"]), vec![1, 2]);
        let b = CompositeError::with_tokens(strings(&["b1"]), vec![3]);

        let merged = a.merger(&b);
        assert_eq!(merged.messages(), &["a1\na2", "b1"]);
        assert!(merged.tokens().is_empty());
        assert!(merged.suppressed().is_empty());
    }

    #[test]
    fn test_merger_with_causes() {
        let a = CompositeError::with_tokens(strings(&["a1"]), vec![1]);
        let b = CompositeError::with_tokens(strings(&["b1", "b2"]), vec![2, 3]);

        let merged = a.merger_with_causes(b);
        assert_eq!(merged.messages(), &["a1", "b1\nb2"]);
        assert_eq!(merged.suppressed().len(), 2);
        assert_eq!(merged.suppressed()[0].to_string(), "a1");
        assert_eq!(merged.suppressed()[1].to_string(), "b1\nb2");

        let inner = merged.suppressed()[1]
            .downcast_ref::<CompositeError<i32>>()
            .unwrap();
        assert_eq!(inner.tokens(), &[2, 3]);
    }

    #[test]
    fn test_from_causes_preserves_order() {
        let err: CompositeError = CompositeError::from_causes(vec![
            ("first", AssertionError::new("cause 1")),
            ("second", AssertionError::new("cause 2")),
        ]);

        assert_eq!(err.message(), "first\nsecond");
        let causes: Vec<String> = err.suppressed().iter().map(|c| c.to_string()).collect();
        assert_eq!(causes, vec!["cause 1", "cause 2"]);
    }

    #[test]
    fn test_error_trait() {
        let err: CompositeError<u8> = CompositeError::new(["x"]);
        let _: &dyn StdError = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompositeError<String>>();
        assert_send_sync::<AssertionError>();
    }

    #[test]
    fn test_assertion_error_source() {
        let plain = AssertionError::new("plain");
        assert_eq!(plain.message(), "plain");
        assert!(plain.source().is_none());

        let io = std::io::Error::other("disk");
        let wrapped = AssertionError::with_source("wrapped", io);
        assert_eq!(wrapped.source().map(|s| s.to_string()), Some("disk".to_string()));
    }

    #[test]
    fn test_debug_format() {
        let err = CompositeError::with_tokens(strings(&["msg"]), vec![7]);
        let debug_output = format!("{:?}", err);
        assert!(debug_output.contains("msg"));
        assert!(debug_output.contains('7'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let err = CompositeError::with_tokens(strings(&["a", "b"]), vec![1, 2]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "messages": ["a", "b"], "tokens": [1, 2] })
        );
    }
}
