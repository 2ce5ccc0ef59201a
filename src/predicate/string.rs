//! String predicates
//!
//! An absent string satisfies every emptiness-family predicate and never
//! matches a pattern.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ASCII whitespace only, the same class `\s` has in most regex dialects.
static BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(?-u:\s)*$").expect("blank pattern is a valid regex"));

/// True iff the string is absent or zero-length.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::string::is_empty;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some("")));
/// assert!(!is_empty(Some(" ")));
/// ```
#[inline]
pub fn is_empty(actual: Option<&str>) -> bool {
    actual.is_none_or(str::is_empty)
}

/// True iff the string is absent, zero-length, or only whitespace.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::string::is_blank;
///
/// assert!(is_blank(Some(" \r\n\t")));
/// assert!(!is_blank(Some(" x ")));
/// ```
#[inline]
pub fn is_blank(actual: Option<&str>) -> bool {
    actual.is_none_or(|s| BLANK.is_match(s))
}

/// True iff the string is absent or has at most `max_length` characters.
///
/// Length is counted in `char`s, not bytes.
#[inline]
pub fn within_max_length(actual: Option<&str>, max_length: usize) -> bool {
    actual.is_none_or(|s| s.chars().count() <= max_length)
}

/// True iff the string is present and the whole of it matches `pattern`.
///
/// The pattern is compiled on every call; a malformed pattern is returned
/// as the error. Compile once with [`Pattern`] when checking repeatedly.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::string::matches;
///
/// assert_eq!(matches(Some("1984-01-23"), r"\d{4}-\d{2}-\d{2}"), Ok(true));
/// assert_eq!(matches(Some("x1984-01-23"), r"\d{4}-\d{2}-\d{2}"), Ok(false));
/// assert!(matches(Some("x"), "(").is_err());
/// ```
pub fn matches(actual: Option<&str>, pattern: &str) -> Result<bool, regex::Error> {
    let pattern = Pattern::new(pattern)?;
    Ok(matches_pattern(actual, &pattern))
}

/// True iff the string is present and the whole of it matches `pattern`.
#[inline]
pub fn matches_pattern(actual: Option<&str>, pattern: &Pattern) -> bool {
    actual.is_some_and(|s| pattern.is_match(s))
}

/// A compiled regular expression that only matches whole strings.
///
/// Keeps the source text it was built from so diagnostics can show the
/// pattern the caller wrote rather than its anchored form.
///
/// # Example
///
/// ```rust
/// use veritas::predicate::string::Pattern;
///
/// let date = Pattern::new(r"\d{4}-\d{2}-\d{2}")?;
/// assert!(date.is_match("1984-01-23"));
/// assert!(!date.is_match("1984-Jan-23"));
/// assert_eq!(date.as_str(), r"\d{4}-\d{2}-\d{2}");
/// # Ok::<(), regex::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` anchored at both ends.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self { source, regex })
    }

    /// The pattern as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True iff `value` matches in its entirety.
    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(!is_empty(Some("x")));
        assert!(!is_empty(Some(" ")));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" ")));
        assert!(is_blank(Some("\r\n")));
        assert!(is_blank(Some("\t\x0B\x0C")));
        assert!(!is_blank(Some("x")));
        assert!(!is_blank(Some("\n x \n")));
    }

    #[test]
    fn test_is_blank_ignores_non_ascii_space() {
        // NO-BREAK SPACE is not part of the ASCII whitespace class
        assert!(!is_blank(Some("\u{a0}")));
    }

    #[test]
    fn test_within_max_length() {
        assert!(within_max_length(None, 0));
        assert!(within_max_length(Some(""), 0));
        assert!(within_max_length(Some("x"), 1));
        assert!(!within_max_length(Some("xx"), 1));
    }

    #[test]
    fn test_within_max_length_counts_chars() {
        assert!(within_max_length(Some("héllo"), 5));
        assert!(!within_max_length(Some("héllo"), 4));
    }

    #[test]
    fn test_matches() {
        let date = r"\d{4}-\d{2}-\d{2}";
        assert_eq!(matches(Some("1984-01-23"), date), Ok(true));
        assert_eq!(matches(Some("1984-Jan-23"), date), Ok(false));
        assert_eq!(matches(None, date), Ok(false));
    }

    #[test]
    fn test_matches_is_anchored() {
        assert_eq!(matches(Some("abc"), "b"), Ok(false));
        assert_eq!(matches(Some("abc"), "a|abc"), Ok(true));
        assert_eq!(matches(Some("abcd"), "abc"), Ok(false));
    }

    #[test]
    fn test_matches_bad_pattern() {
        assert!(matches(Some("x"), "[").is_err());
    }

    #[test]
    fn test_pattern_display_keeps_source() {
        let pattern: Pattern = r"[a-z]+".parse().unwrap();
        assert_eq!(pattern.to_string(), "[a-z]+");
        assert!(matches_pattern(Some("abc"), &pattern));
        assert!(!matches_pattern(Some("abc1"), &pattern));
        assert!(!matches_pattern(None, &pattern));
    }
}
