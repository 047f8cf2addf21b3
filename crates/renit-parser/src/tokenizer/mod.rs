//! Markup tokenizer.
//!
//! Splits a template into lexical items in a single forward pass. At every
//! `<` the candidates are tried in priority order: comment, special block,
//! generic tag. A `<` that starts none of them is literal text.

/// Tokenizer implementation.
pub mod core;
/// Scanning helpers shared with the attribute resolver.
pub mod helpers;
/// Lexical items produced by the tokenizer.
pub mod token;

pub use self::core::MarkupTokenizer;
pub use token::{SpannedToken, Token};
