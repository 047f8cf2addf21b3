//! Tree builder.
//!
//! Consumes the tokenizer's lexical items and assembles a [`Document`]:
//! - text runs pass through the whitespace/trim policy
//! - special blocks become elements with a single raw text child
//! - void and self-closing tags are attached without being opened
//! - closing tags pop the stack of open elements up to the matching name
//!
//! [`Document`]: renit_ast::Document

/// Parser implementation.
pub mod core;

pub use self::core::MarkupParser;
