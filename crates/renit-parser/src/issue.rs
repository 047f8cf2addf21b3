//! Recoverable parse issues.
//!
//! Parsing never fails. Input the parser has to guess about is reported as a
//! [`ParseIssue`] next to the tree instead.

use renit_ast::Span;
use strum_macros::{Display, EnumIter};

/// Category of a parse issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum IssueKind {
    /// An element was still open at end of input.
    UnclosedElement,
    /// A closing tag matched no open element and was ignored.
    UnmatchedCloseTag,
    /// An element was closed by the closing tag of an ancestor.
    ImplicitlyClosed,
    /// An attribute fragment matched no attribute form and was dropped.
    SkippedAttribute,
    /// A `<` started an unterminated construct and was read as text.
    LiteralMarkup,
}

/// A recoverable irregularity in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Category.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Source range the issue refers to.
    pub span: Span,
}

impl ParseIssue {
    /// Create an issue.
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}
