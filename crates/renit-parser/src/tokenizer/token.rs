use renit_ast::Span;

/// A lexical item. Every string borrows from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Characters outside any tag.
    Text(&'a str),

    /// Interior of `<!-- ... -->`, delimiters excluded.
    Comment(&'a str),

    /// A special (raw content) element consumed in one piece: opening tag,
    /// unscanned interior, matching closing tag.
    SpecialBlock {
        /// Tag name.
        name: &'a str,
        /// Attribute substring of the opening tag.
        attributes: &'a str,
        /// Interior between the opening and closing tag.
        raw: &'a str,
        /// Position of the interior in the source.
        raw_span: Span,
    },

    /// An opening tag, possibly written self-closing.
    StartTag {
        /// Tag name.
        name: &'a str,
        /// Attribute substring, without a trailing self-closing `/`.
        attributes: &'a str,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },

    /// A closing tag.
    EndTag {
        /// Tag name.
        name: &'a str,
    },
}

impl Token<'_> {
    /// Variant name, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Comment(_) => "Comment",
            Self::SpecialBlock { .. } => "SpecialBlock",
            Self::StartTag { .. } => "StartTag",
            Self::EndTag { .. } => "EndTag",
        }
    }
}

/// A token with the source range it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'a> {
    /// The lexical item.
    pub token: Token<'a>,
    /// Its range in the source.
    pub span: Span,
}
