//! Scanning helpers for the markup tokenizer.
//!
//! This module contains the byte-level scanners used to find tag boundaries:
//! - Quote and brace skipping, so `>` inside a value never ends a tag
//! - Tag name and tag end detection
//! - Self-closing `/` detection
//! - Closing tag search for special blocks
//!
//! Every delimiter is ASCII, so scanning bytes never splits a UTF-8 sequence
//! at a returned index.

use strum_macros::Display;

/// Why the text after a `<` is not a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScanError {
    /// A `"` or `'` was opened but never closed.
    #[strum(to_string = "unterminated quoted value")]
    UnterminatedQuote,
    /// A `{` was opened but never closed.
    #[strum(to_string = "unterminated brace expression")]
    UnterminatedBrace,
    /// The input ended before `>`.
    #[strum(to_string = "missing `>`")]
    UnterminatedTag,
}

// =============================================================================
// Quote and Brace Helpers
// =============================================================================

/// Skip a quoted string starting at `start` (which must hold the quote).
///
/// Returns the index just past the closing quote. With `escapes`, a backslash
/// escapes the next byte (used for script strings inside brace expressions).
#[must_use]
pub fn skip_quoted(bytes: &[u8], start: usize, escapes: bool) -> Option<usize> {
    let quote = *bytes.get(start)?;
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if escapes => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Skip a brace expression starting at `start` (which must hold `{`).
///
/// Nested braces are balanced and string literals inside the expression are
/// skipped whole. A quote directly after an identifier character is an
/// apostrophe, not a string, so `{isn't}` closes at its `}`. Returns the
/// index just past the matching `}`.
#[must_use]
pub fn skip_braces(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            b'"' | b'\'' | b'`' if opens_string(bytes, i) => {
                i = skip_quoted(bytes, i, true)?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn opens_string(bytes: &[u8], at: usize) -> bool {
    at.checked_sub(1)
        .is_none_or(|prev| !(bytes[prev].is_ascii_alphanumeric() || bytes[prev] == b'_'))
}

// =============================================================================
// Tag Helpers
// =============================================================================

/// End of the tag name starting at `start`.
///
/// The name must begin with an ASCII letter or digit and runs to the first
/// whitespace, `/` or `>`. Returns `None` if the text there is not a tag name.
/// The scan stops at the first byte a name cannot hold, so it never reads
/// past the next `<`.
#[must_use]
pub fn tag_name_end(input: &str, start: usize) -> Option<usize> {
    let rest = &input[start..];
    if !rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }
    let len = rest
        .find(|c: char| {
            c.is_whitespace() || matches!(c, '/' | '>' | '<' | '"' | '\'' | '=' | '{' | '}')
        })
        .unwrap_or(rest.len());
    match rest[len..].chars().next() {
        None => Some(start + len),
        Some(c) if c.is_whitespace() || matches!(c, '/' | '>') => Some(start + len),
        Some(_) => None,
    }
}

/// Index of the `>` that ends the tag whose attributes start at `from`.
///
/// # Errors
///
/// Returns the reason the tag never ends: an unbalanced quote or brace, or
/// end of input.
pub fn find_tag_end(bytes: &[u8], from: usize) -> Result<usize, ScanError> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'>' => return Ok(i),
            b'"' | b'\'' => i = skip_quoted(bytes, i, false).ok_or(ScanError::UnterminatedQuote)?,
            b'{' => i = skip_braces(bytes, i).ok_or(ScanError::UnterminatedBrace)?,
            _ => i += 1,
        }
    }
    Err(ScanError::UnterminatedTag)
}

/// Split a trailing self-closing `/` off an attribute substring.
///
/// A `/` that ends the tag (trailing whitespace aside) always closes it, even
/// after an unquoted value: `<a href=/docs/>` has the value `/docs`.
#[must_use]
pub fn split_self_closing(area: &str) -> (&str, bool) {
    match area.trim_end().strip_suffix('/') {
        Some(before) => (before, true),
        None => (area, false),
    }
}

/// Find `</name>` (whitespace allowed before `>`) at or after `from`.
///
/// Returns the index of `<` and the index just past `>`.
#[must_use]
pub fn find_closing_tag(input: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    while let Some(offset) = input[search..].find("</") {
        let open = search + offset;
        let after_name = open + 2 + name.len();
        if input[open + 2..].starts_with(name) {
            let rest = &input[after_name..];
            let trimmed = rest.trim_start();
            if trimmed.starts_with('>') {
                let close = after_name + (rest.len() - trimmed.len()) + 1;
                return Some((open, close));
            }
        }
        search = open + 2;
    }
    None
}
