//! Render a syntax tree back into markup text.
//!
//! Rendering depends on nothing but the tree:
//! - text is written verbatim, comments as `<!--content-->`
//! - void elements as `<name attrs/>`, other elements as open tag, children,
//!   closing tag
//! - every attribute as `name="value"`, with affixes folded back into the name
//!   and a missing value rendered as the empty string

use crate::{Attribute, Document, Element, Node};

/// Render a document to markup.
#[must_use]
pub fn stringify(document: &Document) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &document.children);
    out
}

/// Render a single node (and its subtree) to markup.
#[must_use]
pub fn stringify_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&text.content),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.content);
            out.push_str("-->");
        }
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for attr in &element.attributes {
        out.push(' ');
        write_attribute(out, attr);
    }
    if element.void_element {
        out.push_str("/>");
        return;
    }
    out.push('>');
    write_nodes(out, &element.children);
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn write_attribute(out: &mut String, attr: &Attribute) {
    out.push_str(&attr.full_name());
    let value = attr.value.as_deref().unwrap_or_default();
    // Single quotes keep a value containing `"` re-parseable.
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push('=');
    out.push(quote);
    out.push_str(value);
    out.push(quote);
}
