//! Markup template parser for Renit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Option resolver** ([`options`])
//!   - Partial JSON/TOML configuration merged with the default tag tables
//!   - Compiled [`ParserConfig`] shared between parses
//!
//! - **Tag matchers** ([`tokenizer`])
//!   - Comments, special (raw content) blocks, opening and closing tags, text
//!   - Quote and brace aware tag scanning
//!
//! - **Attribute resolver** ([`attributes`])
//!   - Five attribute forms plus `{name}` shorthand
//!   - Affix (prefix/suffix) decomposition of attribute names
//!
//! - **Tree builder** ([`parser`])
//!   - Stack of open elements, void and special element policy
//!   - Whitespace/trim transforms, optional source positions
//!
//! The inverse transform, [`stringify`], lives in `renit-ast` and is
//! re-exported here.
//!
//! # Not Implemented
//!
//! - Entity decoding
//! - HTML5 insertion modes and error recovery beyond closing-tag matching
//!
//! # Example
//!
//! ```
//! use renit_parser::{ParseOptions, parse_with, stringify};
//!
//! let options = ParseOptions::new().add_affixes(["!"]);
//! let document = parse_with("<div !variable=1>OK</div>", &options);
//! let div = document.find_element("div").unwrap();
//! assert_eq!(div.attributes[0].prefix.as_deref(), Some("!"));
//! assert_eq!(stringify(&document), r#"<div !variable="1">OK</div>"#);
//! ```

/// Attribute tokenizer and resolver.
pub mod attributes;
/// Recoverable parse issues.
pub mod issue;
/// Parse options and compiled configuration.
pub mod options;
/// Tree builder.
pub mod parser;
/// Static tag vocabularies.
pub mod tags;
/// Markup tokenizer.
pub mod tokenizer;

pub use issue::{IssueKind, ParseIssue};
pub use options::{OptionsError, ParseOptions, ParserConfig};
pub use parser::MarkupParser;
pub use renit_ast::{
    Attribute, AttributeSuffix, Comment, Document, Element, LineColumn, Location, Node, Span,
    Text, print_tree, stringify,
};
pub use tags::TagKind;
pub use tokenizer::{MarkupTokenizer, Token};

/// Parse a template with the default options.
#[must_use]
pub fn parse(source: &str) -> Document {
    parse_with_config(source, &ParserConfig::default())
}

/// Parse a template with the given options.
#[must_use]
pub fn parse_with(source: &str, options: &ParseOptions) -> Document {
    parse_with_config(source, &options.compile())
}

/// Parse a template with an already compiled configuration.
#[must_use]
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Document {
    MarkupParser::new(source, config).run()
}
