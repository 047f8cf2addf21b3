use std::collections::HashMap;

use renit_ast::Span;

use super::helpers::{
    ScanError, find_closing_tag, find_tag_end, split_self_closing, tag_name_end,
};
use super::token::{SpannedToken, Token};
use crate::issue::{IssueKind, ParseIssue};
use crate::options::ParserConfig;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Lazy tokenizer over a template source.
///
/// Yields [`SpannedToken`]s in source order; the read position only moves
/// forward, so the sequence is finite and cannot be restarted. Text runs are
/// maximal: adjacent literal characters (including a `<` that starts no
/// markup) are merged into one [`Token::Text`].
///
/// Every byte is scanned a bounded number of times. A comment or tag that
/// runs off the end of the input turns the rest of the input into text, and
/// closing-tag searches for special blocks are remembered per name.
pub struct MarkupTokenizer<'a> {
    input: &'a str,
    config: &'a ParserConfig,
    pos: usize,
    /// Markup found right after a text run, emitted on the next call.
    pending: Option<SpannedToken<'a>>,
    /// Last closing-tag search result per special name.
    closing_tags: HashMap<&'a str, Option<(usize, usize)>>,
    /// Set once a construct is unterminated; everything after it is text.
    rest_is_text: bool,
    issues: Vec<ParseIssue>,
}

impl<'a> MarkupTokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            input,
            config,
            pos: 0,
            pending: None,
            closing_tags: HashMap::new(),
            rest_is_text: false,
            issues: Vec::new(),
        }
    }

    /// Issues recorded so far (unterminated constructs read as text).
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Take the recorded issues, leaving the list empty.
    pub fn take_issues(&mut self) -> Vec<ParseIssue> {
        std::mem::take(&mut self.issues)
    }

    /// Try every markup form at the `<` at `at`, in priority order.
    fn markup_at(&mut self, at: usize) -> Option<SpannedToken<'a>> {
        let rest = &self.input[at..];
        if rest.starts_with(COMMENT_START) {
            return self.comment_at(at);
        }
        self.tag_at(at)
    }

    fn comment_at(&mut self, at: usize) -> Option<SpannedToken<'a>> {
        let body_start = at + COMMENT_START.len();
        let Some(len) = self.input[body_start..].find(COMMENT_END) else {
            self.record(at, "unterminated comment is read as text");
            return None;
        };
        let end = body_start + len + COMMENT_END.len();
        Some(SpannedToken {
            token: Token::Comment(&self.input[body_start..body_start + len]),
            span: Span::new(at, end),
        })
    }

    fn tag_at(&mut self, at: usize) -> Option<SpannedToken<'a>> {
        let is_end_tag = self.input[at..].starts_with("</");
        let name_start = if is_end_tag { at + 2 } else { at + 1 };
        let name_end = tag_name_end(self.input, name_start)?;
        let name = &self.input[name_start..name_end];

        let gt = match find_tag_end(self.input.as_bytes(), name_end) {
            Ok(gt) => gt,
            Err(err) => {
                self.record_scan_error(at, name, err);
                return None;
            }
        };
        let tag_end = gt + 1;

        if is_end_tag {
            return Some(SpannedToken {
                token: Token::EndTag { name },
                span: Span::new(at, tag_end),
            });
        }

        let (attributes, self_closing) = split_self_closing(&self.input[name_end..gt]);

        if !self_closing
            && self.config.is_special(name)
            && let Some((raw_end, close_end)) = self.closing_tag(name, tag_end)
        {
            return Some(SpannedToken {
                token: Token::SpecialBlock {
                    name,
                    attributes,
                    raw: &self.input[tag_end..raw_end],
                    raw_span: Span::new(tag_end, raw_end),
                },
                span: Span::new(at, close_end),
            });
        }

        Some(SpannedToken {
            token: Token::StartTag {
                name,
                attributes,
                self_closing,
            },
            span: Span::new(at, tag_end),
        })
    }

    /// `</name>` at or after `from`.
    ///
    /// A miss stays a miss for every later offset, and a hit stays valid
    /// until the search passes it.
    fn closing_tag(&mut self, name: &'a str, from: usize) -> Option<(usize, usize)> {
        if let Some(&cached) = self.closing_tags.get(name)
            && cached.is_none_or(|(open, _)| open >= from)
        {
            return cached;
        }
        let found = find_closing_tag(self.input, name, from);
        self.closing_tags.insert(name, found);
        found
    }

    fn record_scan_error(&mut self, at: usize, name: &str, err: ScanError) {
        self.record(at, &format!("tag <{name}> has {err}; read as text"));
    }

    fn record(&mut self, at: usize, message: &str) {
        self.rest_is_text = true;
        self.issues.push(ParseIssue::new(
            IssueKind::LiteralMarkup,
            message,
            Span::new(at, self.input.len()),
        ));
    }
}

impl<'a> Iterator for MarkupTokenizer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let text_start = self.pos;
        let mut cursor = self.pos;
        while !self.rest_is_text
            && let Some(offset) = self.input[cursor..].find('<')
        {
            let at = cursor + offset;
            if let Some(markup) = self.markup_at(at) {
                self.pos = markup.span.end;
                if at == text_start {
                    return Some(markup);
                }
                self.pending = Some(markup);
                return Some(SpannedToken {
                    token: Token::Text(&self.input[text_start..at]),
                    span: Span::new(text_start, at),
                });
            }
            cursor = at + 1;
        }

        self.pos = self.input.len();
        Some(SpannedToken {
            token: Token::Text(&self.input[text_start..]),
            span: Span::new(text_start, self.input.len()),
        })
    }
}
