//! Attribute text extraction and forbidden-pattern matching.

use std::borrow::Cow;
use template_lint_core::ast::ConcatPart;
use template_lint_core::AttrValue;

/// How a forbidden value is compared against attribute text.
///
/// Parsed from the configured string:
///
/// | Written  | Mode        | Matches when                            |
/// |----------|-------------|-----------------------------------------|
/// | `^foo$`  | `Exact`     | some token equals `foo`                 |
/// | `^foo`   | `Prefix`    | some token starts with `foo`            |
/// | `foo$`   | `Suffix`    | some token ends with `foo`              |
/// | `foo`    | `Substring` | the whole text contains `foo` anywhere  |
///
/// Tokens are the whitespace-separated parts of the text. Substring mode
/// looks at the whole text, so it also matches across token boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// `^value$`
    Exact(&'a str),
    /// `^value`
    Prefix(&'a str),
    /// `value$`
    Suffix(&'a str),
    /// `value`
    Substring(&'a str),
}

impl<'a> Pattern<'a> {
    /// Interprets the anchors of a configured value.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match (raw.strip_prefix('^'), raw.strip_suffix('$')) {
            (Some(rest), Some(_)) => Self::Exact(rest.strip_suffix('$').unwrap_or(rest)),
            (Some(rest), None) => Self::Prefix(rest),
            (None, Some(rest)) => Self::Suffix(rest),
            (None, None) => Self::Substring(raw),
        }
    }

    /// Tests the pattern against extracted attribute text.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match *self {
            Self::Exact(value) => tokens(text).any(|token| token == value),
            Self::Prefix(value) => tokens(text).any(|token| token.starts_with(value)),
            Self::Suffix(value) => tokens(text).any(|token| token.ends_with(value)),
            Self::Substring(value) => text.contains(value),
        }
    }
}

fn tokens(text: &str) -> std::str::SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Returns whether `text` contains the forbidden `pattern`.
#[must_use]
pub fn matches(text: &str, pattern: &str) -> bool {
    Pattern::parse(pattern).is_match(text)
}

/// Returns every pattern in `patterns` that `text` matches, in order.
pub fn forbidden_values<'p>(
    text: &'p str,
    patterns: &'p [String],
) -> impl Iterator<Item = &'p str> + 'p {
    patterns
        .iter()
        .map(String::as_str)
        .filter(move |pattern| matches(text, pattern))
}

/// Extracts the statically known text of an attribute value.
///
/// - static text is returned as is
/// - a lone interpolation yields `""`, since it cannot be known at lint time
/// - mixed values keep only their static fragments, joined by one space
/// - unrecognised shapes yield `""`
#[must_use]
pub fn extract_text(value: &AttrValue) -> Cow<'_, str> {
    match value {
        AttrValue::TextNode(text) => Cow::Borrowed(text.chars.as_str()),
        AttrValue::MustacheStatement(_) | AttrValue::Unknown => Cow::Borrowed(""),
        AttrValue::ConcatStatement(concat) => {
            let fragments: Vec<&str> = concat
                .parts
                .iter()
                .filter_map(|part| match part {
                    ConcatPart::TextNode(text) => Some(text.chars.as_str()),
                    ConcatPart::MustacheStatement(_) | ConcatPart::Unknown => None,
                })
                .collect();
            Cow::Owned(fragments.join(" "))
        }
    }
}
