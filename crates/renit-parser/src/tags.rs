//! Static tag vocabularies.
//!
//! Process-wide read-only data consumed by the option resolver when it builds
//! a [`ParserConfig`](crate::ParserConfig). Nothing here is mutable.

use strum_macros::{Display, EnumString, IntoStaticStr};

/// Elements that never have a closing tag or children.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// The `<template>` tag, captured raw so its interior reaches the compiler untouched.
pub const TEMPLATE_TAG: &str = "template";

/// The `<script>` tag.
pub const SCRIPT_TAG: &str = "script";

/// The `<style>` tag.
pub const STYLE_TAG: &str = "style";

/// Raw text elements.
pub const RAW_TEXT_TAGS: &[&str] = &[SCRIPT_TAG, STYLE_TAG];

/// Escapable raw text elements. Captured verbatim as well: no entity decoding.
pub const ESCAPABLE_RAW_TEXT_TAGS: &[&str] = &["textarea", "title"];

/// Elements whose interior is captured as one literal text node.
pub const SPECIAL_TAGS: &[&str] = &[TEMPLATE_TAG, SCRIPT_TAG, STYLE_TAG, "textarea", "title"];

/// Attribute affix markers recognized by default.
pub const DEFAULT_AFFIXES: &[&str] = &[":", "@", "|", "*", "#", "^"];

/// Standard HTML element names.
pub const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo", "big",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "keygen", "label",
    "legend", "li", "link", "main", "map", "mark", "menu", "menuitem", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre",
    "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "section", "select", "small",
    "source", "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
    "var", "video", "wbr",
];

/// Standard SVG element names (case-sensitive).
pub const SVG_ELEMENTS: &[&str] = &[
    "circle", "clipPath", "defs", "ellipse", "feBlend", "feColorMatrix", "feComponentTransfer",
    "feComposite", "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap", "feDistantLight",
    "feFlood", "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge",
    "feMergeNode", "feMorphology", "feOffset", "fePointLight", "feSpecularLighting",
    "feSpotLight", "feTile", "feTurbulence", "g", "line", "linearGradient", "mask", "path",
    "pattern", "polygon", "polyline", "radialGradient", "rect", "stop", "svg", "text", "tspan",
];

/// Template control-flow and component elements of the toolchain.
pub const COMPONENT_ELEMENTS: &[&str] = &["component", "if", "elseif", "else", "for"];

/// Vocabulary a tag name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    /// A standard HTML element.
    Html,
    /// A standard SVG element.
    Svg,
    /// A toolchain component or control-flow element.
    Component,
    /// Anything else, typically a user component.
    Custom,
}

impl TagKind {
    /// Classify a tag name. HTML wins over SVG for names in both tables.
    #[must_use]
    pub fn of(name: &str) -> Self {
        if HTML_ELEMENTS.contains(&name) {
            Self::Html
        } else if SVG_ELEMENTS.contains(&name) {
            Self::Svg
        } else if COMPONENT_ELEMENTS.contains(&name) {
            Self::Component
        } else {
            Self::Custom
        }
    }
}
