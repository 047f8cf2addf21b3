//! Syntax tree for Renit markup templates.
//!
//! This crate provides the owned, tree-shaped node model produced by the
//! parser and consumed by the stringifier and downstream compilers.
//!
//! # Design
//!
//! Parents own their children directly; there are no back-references, so a
//! tree can be cloned, compared and serialized without an arena. The serde
//! representation matches the JSON shape the template toolchain exchanges:
//! every node carries a `type` tag and field names are camelCase.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stringifier (tree to markup text).
pub mod stringify;

pub use stringify::stringify;

/// Byte range of a node in the source text, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span from its bounds.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A line/column pair. Lines are 1-based, columns 0-based (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineColumn {
    /// 1-based line number.
    pub line: usize,
    /// 0-based column number.
    pub column: usize,
}

/// Start and end line/column of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    /// Position of the first character.
    pub start: LineColumn,
    /// Position just past the last character.
    pub end: LineColumn,
}

/// The synthetic root wrapping the top-level nodes of a template.
///
/// Exactly one is produced per parse, even for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Document {
    /// Top-level nodes in source order.
    pub children: Vec<Node>,
}

/// Any node below the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A tag with attributes and (unless void) children.
    Element(Element),
    /// A run of character data, or the raw interior of a special element.
    Text(Text),
    /// The interior of a `<!-- ... -->` comment.
    Comment(Comment),
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Tag name exactly as written.
    pub name: String,
    /// Set for vocabulary void tags and for explicit `/>` syntax.
    /// A void element never has children.
    pub void_element: bool,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
    /// Byte span, when index tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Span>,
    /// Line/column span, when location tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// Text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Character data, verbatim (no entity decoding).
    pub content: String,
    /// Byte span of the untrimmed run, when index tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Span>,
    /// Line/column span, when location tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// Comment node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Text between `<!--` and `-->`, never trimmed.
    pub content: String,
    /// Byte span including the delimiters, when index tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Span>,
    /// Line/column span, when location tracking is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// An element attribute, optionally decomposed into affixes.
///
/// `@click` has prefix `@` and name `click`; `class:visible` has name `class`
/// and a single suffix `{ prefix: ":", name: "visible" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Attribute {
    /// Affix marker written before the core name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Core name, never including the prefix.
    pub name: String,
    /// Affix-delimited qualifiers following the core name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<AttributeSuffix>>,
    /// Value without surrounding quotes. `None` for valueless attributes.
    /// Brace expressions keep their braces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One qualifier of an attribute name, e.g. `:visible` in `class:visible`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSuffix {
    /// The affix marker.
    pub prefix: String,
    /// The qualifier name.
    pub name: String,
}

impl Document {
    /// Create a document from its top-level nodes.
    #[must_use]
    pub const fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Top-level nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Top-level elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All nodes in document order (pre-order, depth-first).
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// First element with the given name, depth-first.
    #[must_use]
    pub fn find_element(&self, name: &str) -> Option<&Element> {
        self.descendants()
            .filter_map(Node::as_element)
            .find(|element| element.name == name)
    }

    /// Concatenated content of every text node in the document.
    #[must_use]
    pub fn text_content(&self) -> String {
        collect_text(&self.children)
    }
}

impl Node {
    /// Element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&text.content),
            _ => None,
        }
    }

    /// Comment content if this node is a comment.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(comment) => Some(&comment.content),
            _ => None,
        }
    }

    /// Children of an element; empty for text and comments.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Byte span, when the parse tracked indices.
    #[must_use]
    pub const fn index(&self) -> Option<Span> {
        match self {
            Self::Element(element) => element.index,
            Self::Text(text) => text.index,
            Self::Comment(comment) => comment.index,
        }
    }

    /// Line/column span, when the parse tracked locations.
    #[must_use]
    pub const fn loc(&self) -> Option<Location> {
        match self {
            Self::Element(element) => element.loc,
            Self::Text(text) => text.loc,
            Self::Comment(comment) => comment.loc,
        }
    }
}

impl Element {
    /// Create an element with no attributes, children or position.
    #[must_use]
    pub fn new(name: impl Into<String>, void_element: bool) -> Self {
        Self {
            name: name.into(),
            void_element,
            attributes: Vec::new(),
            children: Vec::new(),
            index: None,
            loc: None,
        }
    }

    /// First attribute whose core name is `name` (prefix and suffixes ignored).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated content of every text node below this element.
    #[must_use]
    pub fn text_content(&self) -> String {
        collect_text(&self.children)
    }
}

impl Text {
    /// Create a text node without position.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            index: None,
            loc: None,
        }
    }
}

impl Comment {
    /// Create a comment node without position.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            index: None,
            loc: None,
        }
    }
}

impl Attribute {
    /// Create a valueless attribute with no affixes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            name: name.into(),
            suffix: None,
            value: None,
        }
    }

    /// Set the value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the prefix marker.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Append a suffix qualifier.
    #[must_use]
    pub fn with_suffix(mut self, prefix: impl Into<String>, name: impl Into<String>) -> Self {
        self.suffix
            .get_or_insert_with(Vec::new)
            .push(AttributeSuffix {
                prefix: prefix.into(),
                name: name.into(),
            });
        self
    }

    /// Name as written in the source: prefix, core name, then every suffix.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut full = String::new();
        if let Some(prefix) = &self.prefix {
            full.push_str(prefix);
        }
        full.push_str(&self.name);
        for suffix in self.suffix.iter().flatten() {
            full.push_str(&suffix.prefix);
            full.push_str(&suffix.name);
        }
        full
    }
}

fn collect_text(nodes: &[Node]) -> String {
    Descendants::new(nodes).filter_map(Node::as_text).collect()
}

/// Pre-order iterator over a node list and everything below it.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify::stringify_node(self))
    }
}

/// Render an indented outline of the tree, one node per line.
#[must_use]
pub fn format_tree(document: &Document) -> String {
    let mut out = String::from("Document\n");
    for child in &document.children {
        format_node(&mut out, child, 1);
    }
    out
}

/// Print a tree outline for debugging.
pub fn print_tree(document: &Document) {
    print!("{}", format_tree(document));
}

fn format_node(out: &mut String, node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => {
            out.push_str(&prefix);
            out.push('<');
            out.push_str(&element.name);
            for attr in &element.attributes {
                out.push(' ');
                out.push_str(&attr.full_name());
                if let Some(value) = &attr.value {
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
            }
            out.push_str(if element.void_element { "/>\n" } else { ">\n" });
            for child in &element.children {
                format_node(out, child, indent + 1);
            }
        }
        Node::Text(text) => {
            let display = text.content.replace('\n', "\\n").replace(' ', "\u{00B7}");
            out.push_str(&format!("{prefix}\"{display}\"\n"));
        }
        Node::Comment(comment) => {
            out.push_str(&format!("{prefix}<!--{}-->\n", comment.content));
        }
    }
}
