//! Attribute tokenizer and resolver.
//!
//! An attribute substring is split into tokens of five forms, tried in order
//! at each position:
//! - `name="value"`
//! - `name='value'`
//! - `name={expression}` (the braces stay in the value)
//! - `name=value` (unquoted, up to whitespace)
//! - `name` (no value)
//!
//! A bare `{name}` is shorthand for `name={name}`. Anything else is skipped.
//! Each token is then resolved into an [`Attribute`], splitting affix markers
//! out of the name when an [`AffixMatcher`] is given.

use renit_ast::{Attribute, AttributeSuffix};
use strum_macros::Display;

use crate::options::AffixMatcher;
use crate::tokenizer::helpers::{skip_braces, skip_quoted};

/// How an attribute's value was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValueStyle {
    /// `name="value"`
    DoubleQuoted,
    /// `name='value'`
    SingleQuoted,
    /// `name={expression}`
    Expression,
    /// `name=value`
    Unquoted,
    /// `name`
    Boolean,
    /// `{name}`
    Shorthand,
}

/// One attribute as written, before affix resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeToken<'a> {
    /// Full name, affixes included.
    pub name: &'a str,
    /// Value without quotes; braces kept for expressions.
    pub value: Option<&'a str>,
    /// Value syntax.
    pub style: ValueStyle,
}

/// Result of tokenizing an attribute substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTokens<'a> {
    /// Tokens in source order.
    pub tokens: Vec<AttributeToken<'a>>,
    /// Fragments that matched no form, in source order.
    pub skipped: Vec<&'a str>,
}

/// Characters that end an attribute name.
const fn ends_name(c: u8) -> bool {
    c.is_ascii_whitespace()
        || matches!(c, b'=' | b'"' | b'\'' | b'/' | b'<' | b'>' | b'{' | b'}')
}

/// Split an attribute substring into tokens.
#[must_use]
pub fn tokenize_attributes(source: &str) -> AttributeTokens<'_> {
    let bytes = source.as_bytes();
    let mut result = AttributeTokens::default();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if bytes[pos] == b'{' {
            let Some(end) = skip_braces(bytes, pos) else {
                result.skipped.push(&source[pos..]);
                break;
            };
            let expression = &source[pos..end];
            let name = expression[1..expression.len() - 1].trim();
            if name.is_empty() {
                result.skipped.push(expression);
            } else {
                result.tokens.push(AttributeToken {
                    name,
                    value: Some(expression),
                    style: ValueStyle::Shorthand,
                });
            }
            pos = end;
            continue;
        }

        if ends_name(bytes[pos]) {
            // Stray punctuation such as a lone `=` or `/`.
            let end = pos + source[pos..].chars().next().map_or(1, char::len_utf8);
            result.skipped.push(&source[pos..end]);
            pos = end;
            continue;
        }

        let name_start = pos;
        while pos < bytes.len() && !ends_name(bytes[pos]) {
            pos += 1;
        }
        let name = &source[name_start..pos];

        let mut cursor = pos;
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if bytes.get(cursor) != Some(&b'=') {
            result.tokens.push(AttributeToken {
                name,
                value: None,
                style: ValueStyle::Boolean,
            });
            continue;
        }
        cursor += 1;
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }

        match bytes.get(cursor) {
            Some(&quote @ (b'"' | b'\'')) => {
                let Some(end) = skip_quoted(bytes, cursor, false) else {
                    result.skipped.push(&source[name_start..]);
                    break;
                };
                result.tokens.push(AttributeToken {
                    name,
                    value: Some(&source[cursor + 1..end - 1]),
                    style: if quote == b'"' {
                        ValueStyle::DoubleQuoted
                    } else {
                        ValueStyle::SingleQuoted
                    },
                });
                pos = end;
            }
            Some(b'{') => {
                let Some(end) = skip_braces(bytes, cursor) else {
                    result.skipped.push(&source[name_start..]);
                    break;
                };
                result.tokens.push(AttributeToken {
                    name,
                    value: Some(&source[cursor..end]),
                    style: ValueStyle::Expression,
                });
                pos = end;
            }
            _ => {
                let mut end = cursor;
                while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                    end += 1;
                }
                result.tokens.push(AttributeToken {
                    name,
                    value: Some(&source[cursor..end]),
                    style: ValueStyle::Unquoted,
                });
                pos = end;
            }
        }
    }

    result
}

/// Resolve a token into an attribute.
///
/// With an affix matcher, a name containing markers is decomposed: a leading
/// marker becomes `prefix`, the text up to the next marker becomes `name`, and
/// every following marker-introduced segment becomes a `suffix` entry. Names
/// without markers, and shorthand tokens, are used unmodified.
#[must_use]
pub fn resolve_attribute(token: &AttributeToken<'_>, affix: Option<&AffixMatcher>) -> Attribute {
    let mut attribute = Attribute::new(token.name);
    attribute.value = token.value.map(str::to_string);

    let Some(matcher) = affix else {
        return attribute;
    };
    if token.style == ValueStyle::Shorthand || !matcher.contains_affix(token.name) {
        return attribute;
    }

    let mut segments = matcher.split(token.name).into_iter();
    if let Some(first) = segments.next() {
        attribute.prefix = first.prefix.map(str::to_string);
        attribute.name = first.name.to_string();
    }
    let suffix: Vec<AttributeSuffix> = segments
        .map(|segment| AttributeSuffix {
            prefix: segment.prefix.unwrap_or_default().to_string(),
            name: segment.name.to_string(),
        })
        .collect();
    if !suffix.is_empty() {
        attribute.suffix = Some(suffix);
    }
    attribute
}

/// Tokenize and resolve an attribute substring.
///
/// Returns the attributes and the skipped fragments.
#[must_use]
pub fn resolve_attributes<'a>(
    source: &'a str,
    affix: Option<&AffixMatcher>,
) -> (Vec<Attribute>, Vec<&'a str>) {
    let AttributeTokens { tokens, skipped } = tokenize_attributes(source);
    let attributes = tokens
        .iter()
        .map(|token| resolve_attribute(token, affix))
        .collect();
    (attributes, skipped)
}
