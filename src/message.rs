//! Diagnostic message templates
//!
//! Every failed assertion is reported with one of a closed set of
//! [`Template`]s. A template is a static string with positional slots
//! `{0}`..`{n}` that are always bound in the same order:
//!
//! - `{0}` - the entity label
//! - `{1}` - the first field label
//! - `{2}` - the second field label (two-field templates only)
//! - then the rendered values, in the order the assertion declares them
//!
//! Single-field templates start with
//! `Assertion failed for field: "{0}#{1}";\t` and two-field templates with
//! `Assertion failed for fields: "{0}#{1}" and "{0}#{2}";\t`.
//!
//! # Example
//!
//! ```rust
//! use veritas::message::{arg, Template};
//!
//! let message = Template::Blank.format(&[
//!     "User".to_string(),
//!     "name".to_string(),
//!     arg::text(Some("xxx")),
//! ]);
//! assert_eq!(
//!     message,
//!     "Assertion failed for field: \"User#name\";\tExpected string[\"xxx\"] to be blank, empty, or null."
//! );
//! ```

use std::fmt;

macro_rules! field {
    ($body:literal) => {
        concat!("Assertion failed for field: \"{0}#{1}\";\t", $body)
    };
}

macro_rules! fields {
    ($body:literal) => {
        concat!(
            "Assertion failed for fields: \"{0}#{1}\" and \"{0}#{2}\";\t",
            $body
        )
    };
}

/// The broad category a failed assertion belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Wrong cardinality of absent values.
    Nullability,
    /// Blank, empty, length or pattern violations.
    StringShape,
    /// Emptiness, containment or element-matching violations.
    CollectionShape,
    /// Equality or inequality of values, strings, collections, dates or numbers.
    Equality,
    /// Ordering with tolerance.
    Ordering,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Nullability => "nullability",
            FailureKind::StringShape => "string-shape",
            FailureKind::CollectionShape => "collection-shape",
            FailureKind::Equality => "equality",
            FailureKind::Ordering => "ordering",
        };
        f.write_str(name)
    }
}

/// A diagnostic template, one per kind of failed assertion.
///
/// Each variant is named after the assertion it reports; its doc states
/// what was observed when that assertion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    /// The value was absent.
    NotNull,
    /// The value was present.
    Null,
    /// Both or neither of two values were absent.
    XorNull,
    /// Exactly one of two values was absent.
    XorNotNull,
    /// Neither of two values was absent.
    OrNull,
    /// Both of two values were absent.
    OrNotNull,
    /// The string had a non-whitespace character.
    Blank,
    /// The string was absent, empty or whitespace.
    NotBlank,
    /// The string had characters.
    Empty,
    /// The string was absent or empty.
    NotEmpty,
    /// The string was longer than the limit.
    WithinMaxLength,
    /// The string fit within the limit.
    NotWithinMaxLength,
    /// The string did not match the pattern.
    Matches,
    /// The string matched the pattern.
    NotMatches,
    /// The collection had elements.
    EmptyCollection,
    /// The collection was absent or empty.
    NotEmptyCollection,
    /// Some expected element was missing.
    ContainsAll,
    /// No expected element was present.
    ContainsAny,
    /// Some unwanted element was present.
    ContainsNone,
    /// Some element failed the matcher.
    MatchesAll,
    /// No element passed the matcher.
    MatchesAny,
    /// Some element passed the matcher.
    MatchesNone,
    /// Two values differed.
    Equal,
    /// Two values were equal.
    NotEqual,
    /// Two strings differed.
    EqualString,
    /// Two strings were equal.
    NotEqualString,
    /// Two instants were further apart than the tolerance.
    EqualDateWithTolerance,
    /// Two instants were within the tolerance.
    NotEqualDateWithTolerance,
    /// Two numbers were further apart than epsilon.
    EqualWithError,
    /// Two numbers were within epsilon.
    NotEqualWithError,
    /// `actual - epsilon > bound` did not hold.
    GreaterThanWithError,
    /// `actual + epsilon >= bound` did not hold.
    GreaterThanOrEqualWithError,
    /// `actual + epsilon < bound` did not hold.
    LessThanWithError,
    /// `actual - epsilon <= bound` did not hold.
    LessThanOrEqualWithError,
}

impl Template {
    /// Every template, in declaration order.
    pub const ALL: [Template; 34] = [
        Template::NotNull,
        Template::Null,
        Template::XorNull,
        Template::XorNotNull,
        Template::OrNull,
        Template::OrNotNull,
        Template::Blank,
        Template::NotBlank,
        Template::Empty,
        Template::NotEmpty,
        Template::WithinMaxLength,
        Template::NotWithinMaxLength,
        Template::Matches,
        Template::NotMatches,
        Template::EmptyCollection,
        Template::NotEmptyCollection,
        Template::ContainsAll,
        Template::ContainsAny,
        Template::ContainsNone,
        Template::MatchesAll,
        Template::MatchesAny,
        Template::MatchesNone,
        Template::Equal,
        Template::NotEqual,
        Template::EqualString,
        Template::NotEqualString,
        Template::EqualDateWithTolerance,
        Template::NotEqualDateWithTolerance,
        Template::EqualWithError,
        Template::NotEqualWithError,
        Template::GreaterThanWithError,
        Template::GreaterThanOrEqualWithError,
        Template::LessThanWithError,
        Template::LessThanOrEqualWithError,
    ];

    /// The raw template text, prefix included.
    pub const fn pattern(self) -> &'static str {
        match self {
            Template::NotNull => field!("Expected object to be non-null."),
            Template::Null => field!("Expected object to be null."),
            Template::XorNull => fields!("Expected exactly 1 object to be null."),
            Template::XorNotNull => fields!("Expected exactly 1 object to be non-null."),
            Template::OrNull => fields!("Expected either object to be null."),
            Template::OrNotNull => fields!("Expected either object to be non-null."),
            Template::Blank => field!("Expected string[\"{2}\"] to be blank, empty, or null."),
            Template::NotBlank => field!("Expected string to not be blank, empty, or null."),
            Template::Empty => field!("Expected string[\"{2}\"] to be empty, or null."),
            Template::NotEmpty => field!("Expected string to not be empty, or null."),
            Template::WithinMaxLength => {
                field!("Expected string[\"{2}\"] length[{3}] to be within length[{4}].")
            }
            Template::NotWithinMaxLength => {
                field!("Expected string[\"{2}\"] length[{3}] to exceed length[{4}].")
            }
            Template::Matches => field!("Expected string[\"{2}\"] to match pattern[\"{3}\"]."),
            Template::NotMatches => {
                field!("Expected string[\"{2}\"] to not match pattern[\"{3}\"].")
            }
            Template::EmptyCollection => field!("Expected collection[{2}] to be empty, or null."),
            Template::NotEmptyCollection => field!("Expected collection to not be empty, or null."),
            Template::ContainsAll => {
                field!("Expected collection[{2}] to contain all values of collection[{3}].")
            }
            Template::ContainsAny => {
                field!("Expected collection[{2}] to contain any values of collection[{3}].")
            }
            Template::ContainsNone => {
                field!("Expected collection[{2}] to contain no values of collection[{3}].")
            }
            Template::MatchesAll => field!("Expected collection[{2}] to match all values."),
            Template::MatchesAny => field!("Expected collection[{2}] to match any values."),
            Template::MatchesNone => field!("Expected collection[{2}] to match no values."),
            Template::Equal | Template::NotEqual => field!("Actual[{2}]  Expected[{3}]."),
            Template::EqualString | Template::NotEqualString => {
                field!("Actual[\"{2}\"]  Expected[\"{3}\"].")
            }
            Template::EqualDateWithTolerance | Template::NotEqualDateWithTolerance => {
                field!("Actual[{2}]  [{4} s]  Expected[{3}].")
            }
            Template::EqualWithError | Template::NotEqualWithError => {
                field!("Actual[{2}]  [{4}]  Expected[{3}].")
            }
            Template::GreaterThanWithError => field!("Actual[{2}]  [{4}] > Expected[{3}]."),
            Template::GreaterThanOrEqualWithError => {
                field!("Actual[{2}]  [{4}] >= Expected[{3}].")
            }
            Template::LessThanWithError => field!("Actual[{2}]  [{4}] < Expected[{3}]."),
            Template::LessThanOrEqualWithError => field!("Actual[{2}]  [{4}] <= Expected[{3}]."),
        }
    }

    /// Registry key of the template.
    pub const fn key(self) -> &'static str {
        match self {
            Template::NotNull => "notNull",
            Template::Null => "null",
            Template::XorNull => "xorNull",
            Template::XorNotNull => "xorNotNull",
            Template::OrNull => "orNull",
            Template::OrNotNull => "orNotNull",
            Template::Blank => "blank",
            Template::NotBlank => "notBlank",
            Template::Empty => "empty",
            Template::NotEmpty => "notEmpty",
            Template::WithinMaxLength => "withinMaxLength",
            Template::NotWithinMaxLength => "notWithinMaxLength",
            Template::Matches => "matches",
            Template::NotMatches => "notMatches",
            Template::EmptyCollection => "emptyCollection",
            Template::NotEmptyCollection => "notEmptyCollection",
            Template::ContainsAll => "containsAll",
            Template::ContainsAny => "containsAny",
            Template::ContainsNone => "containsNone",
            Template::MatchesAll => "matchesAll",
            Template::MatchesAny => "matchesAny",
            Template::MatchesNone => "matchesNone",
            Template::Equal => "equal",
            Template::NotEqual => "notEqual",
            Template::EqualString => "equalString",
            Template::NotEqualString => "notEqualString",
            Template::EqualDateWithTolerance => "equalDateWithTolerance",
            Template::NotEqualDateWithTolerance => "notEqualDateWithTolerance",
            Template::EqualWithError => "equalWithError",
            Template::NotEqualWithError => "notEqualWithError",
            Template::GreaterThanWithError => "greaterThanWithError",
            Template::GreaterThanOrEqualWithError => "greaterThanOrEqualWithError",
            Template::LessThanWithError => "lessThanWithError",
            Template::LessThanOrEqualWithError => "lessThanOrEqualWithError",
        }
    }

    /// Look a template up by its registry key.
    pub fn from_key(key: &str) -> Option<Template> {
        Template::ALL.into_iter().find(|t| t.key() == key)
    }

    /// The failure category this template reports.
    pub const fn kind(self) -> FailureKind {
        match self {
            Template::NotNull
            | Template::Null
            | Template::XorNull
            | Template::XorNotNull
            | Template::OrNull
            | Template::OrNotNull => FailureKind::Nullability,
            Template::Blank
            | Template::NotBlank
            | Template::Empty
            | Template::NotEmpty
            | Template::WithinMaxLength
            | Template::NotWithinMaxLength
            | Template::Matches
            | Template::NotMatches => FailureKind::StringShape,
            Template::EmptyCollection
            | Template::NotEmptyCollection
            | Template::ContainsAll
            | Template::ContainsAny
            | Template::ContainsNone
            | Template::MatchesAll
            | Template::MatchesAny
            | Template::MatchesNone => FailureKind::CollectionShape,
            Template::Equal
            | Template::NotEqual
            | Template::EqualString
            | Template::NotEqualString
            | Template::EqualDateWithTolerance
            | Template::NotEqualDateWithTolerance
            | Template::EqualWithError
            | Template::NotEqualWithError => FailureKind::Equality,
            Template::GreaterThanWithError
            | Template::GreaterThanOrEqualWithError
            | Template::LessThanWithError
            | Template::LessThanOrEqualWithError => FailureKind::Ordering,
        }
    }

    /// Number of field labels the template names: 1 or 2.
    pub const fn field_count(self) -> usize {
        match self {
            Template::XorNull | Template::XorNotNull | Template::OrNull | Template::OrNotNull => 2,
            _ => 1,
        }
    }

    /// Bind `args` to the template's slots.
    pub fn format<A: AsRef<str>>(self, args: &[A]) -> String {
        format(self.pattern(), args)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Substitute `{n}` slots in `pattern` with `args[n]`.
///
/// Arguments are inserted verbatim and never rescanned, so braces inside a
/// value are left alone. A slot with no matching argument, or any other
/// brace, is copied through unchanged.
///
/// # Example
///
/// ```rust
/// use veritas::message::format;
///
/// assert_eq!(format("{0}#{1} {2}", &["a", "{1}"]), "a#{1} {2}");
/// ```
pub fn format<A: AsRef<str>>(pattern: &str, args: &[A]) -> String {
    let capacity = pattern.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .filter(|_| after[digits..].starts_with('}'))
            .and_then(|index| args.get(index));

        match arg {
            Some(arg) => {
                out.push_str(arg.as_ref());
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Renderers that turn assertion values into template arguments.
///
/// Absent values render as `null`.
pub mod arg {
    use crate::predicate::TimePoint;
    use std::fmt::Display;

    /// Rendering of an absent value.
    pub const NULL: &str = "null";

    /// Render any displayable value.
    pub fn value<T: Display>(value: Option<T>) -> String {
        value.map_or_else(|| NULL.to_string(), |v| v.to_string())
    }

    /// Render a string verbatim.
    pub fn text(value: Option<&str>) -> String {
        value.unwrap_or(NULL).to_string()
    }

    /// Render a collection as `[a, b, c]`.
    ///
    /// ```rust
    /// use veritas::message::arg;
    ///
    /// assert_eq!(arg::list(Some(&["x", "y"][..])), "[x, y]");
    /// assert_eq!(arg::list::<i32>(Some(&[][..])), "[]");
    /// assert_eq!(arg::list::<i32>(None), "null");
    /// ```
    pub fn list<T: Display>(value: Option<&[T]>) -> String {
        match value {
            Some(items) => {
                let items: Vec<String> = items.iter().map(ToString::to_string).collect();
                format!("[{}]", items.join(", "))
            }
            None => NULL.to_string(),
        }
    }

    /// Render a point in time.
    pub fn time<D: TimePoint>(value: Option<D>) -> String {
        value.map_or_else(|| NULL.to_string(), |v| v.render())
    }
}
