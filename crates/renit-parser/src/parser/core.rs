use renit_ast::{Comment, Document, Element, LineColumn, Location, Node, Span, Text};
use renit_common::LineIndex;
use renit_common::WarningLog;

use crate::attributes::resolve_attributes;
use crate::issue::{IssueKind, ParseIssue};
use crate::options::ParserConfig;
use crate::tokenizer::{MarkupTokenizer, SpannedToken, Token};

/// An element whose closing tag has not been seen yet.
struct OpenElement {
    element: Element,
    /// Offset of the `<` of its opening tag.
    start: usize,
}

/// Tree builder.
///
/// Drives a [`MarkupTokenizer`] over the source and assembles the
/// [`Document`], keeping a stack of open elements. Never fails: irregular
/// input is repaired deterministically and reported as [`ParseIssue`]s.
pub struct MarkupParser<'a> {
    source: &'a str,
    config: &'a ParserConfig,
    tokenizer: MarkupTokenizer<'a>,

    /// Open elements, innermost last. Nodes are inserted into the last one,
    /// or into the document when the stack is empty.
    stack_of_open_elements: Vec<OpenElement>,

    document: Document,

    /// Present only when location tracking is enabled.
    line_index: Option<LineIndex<'a>>,

    issues: Vec<ParseIssue>,

    /// Messages already logged by this parse.
    warnings: WarningLog,
}

impl<'a> MarkupParser<'a> {
    /// Create a parser over `source`.
    #[must_use]
    pub fn new(source: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            source,
            config,
            tokenizer: MarkupTokenizer::new(source, config),
            stack_of_open_elements: Vec::new(),
            document: Document::default(),
            line_index: config.track_loc().then(|| LineIndex::new(source)),
            issues: Vec::new(),
            warnings: WarningLog::new(),
        }
    }

    /// Run the parser and return the document.
    #[must_use]
    pub fn run(self) -> Document {
        self.run_with_issues().0
    }

    /// Run the parser and return the document with every issue encountered,
    /// ordered by source position.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Document, Vec<ParseIssue>) {
        let issues = self.build();
        (self.document, issues)
    }

    /// Consume every token into the document and collect the issues.
    fn build(&mut self) -> Vec<ParseIssue> {
        tracing::debug!(bytes = self.source.len(), "parsing template");

        while let Some(SpannedToken { token, span }) = self.tokenizer.next() {
            tracing::trace!(kind = token.kind(), start = span.start, end = span.end, "token");
            self.process_token(token, span);
        }
        self.close_remaining();

        let mut issues = self.tokenizer.take_issues();
        for issue in &issues {
            let _ = self.warnings.warn_once("Tokenizer", &issue.message);
        }
        issues.append(&mut self.issues);
        issues.sort_by_key(|issue| issue.span.start);

        tracing::debug!(
            nodes = self.document.descendants().count(),
            issues = issues.len(),
            "parsed template"
        );
        issues
    }

    fn process_token(&mut self, token: Token<'a>, span: Span) {
        match token {
            Token::Text(content) => {
                if let Some(text) = self.create_text(content, span) {
                    self.insert_node(text);
                }
            }
            Token::Comment(content) => {
                let (index, loc) = self.position(span);
                self.insert_node(Node::Comment(Comment {
                    content: content.to_string(),
                    index,
                    loc,
                }));
            }
            Token::SpecialBlock {
                name,
                attributes,
                raw,
                raw_span,
            } => {
                let mut element = self.create_element(name, attributes, false, span);
                if let Some(text) = self.create_text(raw, raw_span) {
                    element.children.push(text);
                }
                self.set_position(&mut element, span);
                self.insert_node(Node::Element(element));
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let void_element = self_closing || self.config.is_void(name);
                let mut element = self.create_element(name, attributes, void_element, span);
                if void_element {
                    self.set_position(&mut element, span);
                    self.insert_node(Node::Element(element));
                } else {
                    self.stack_of_open_elements.push(OpenElement {
                        element,
                        start: span.start,
                    });
                }
            }
            Token::EndTag { name } => self.close_element(name, span),
        }
    }

    /// Build an element, resolving its attribute substring.
    fn create_element(
        &mut self,
        name: &str,
        attributes: &str,
        void_element: bool,
        span: Span,
    ) -> Element {
        let (attributes, skipped) = resolve_attributes(attributes, self.config.affix());
        for fragment in skipped {
            self.issue(
                IssueKind::SkippedAttribute,
                &format!("dropped attribute fragment {fragment:?} in <{name}>"),
                span,
            );
        }
        let mut element = Element::new(name, void_element);
        element.attributes = attributes;
        element
    }

    /// Build a text node under the whitespace/trim policy.
    fn create_text(&self, content: &str, span: Span) -> Option<Node> {
        let content = self.config.transform_text(content)?;
        let (index, loc) = self.position(span);
        Some(Node::Text(Text {
            content: content.to_string(),
            index,
            loc,
        }))
    }

    /// Append a node to the current open element, or to the document.
    fn insert_node(&mut self, node: Node) {
        match self.stack_of_open_elements.last_mut() {
            Some(open) => open.element.children.push(node),
            None => self.document.children.push(node),
        }
    }

    /// Handle `</name>`: pop elements until one named `name` has been popped.
    ///
    /// Elements popped on the way are closed where the closing tag starts. A
    /// closing tag with no matching open element is ignored.
    fn close_element(&mut self, name: &str, span: Span) {
        let Some(depth) = self
            .stack_of_open_elements
            .iter()
            .rposition(|open| open.element.name == name)
        else {
            self.issue(
                IssueKind::UnmatchedCloseTag,
                &format!("closing tag </{name}> matches no open element"),
                span,
            );
            return;
        };

        while self.stack_of_open_elements.len() > depth + 1 {
            if let Some(open) = self.stack_of_open_elements.pop() {
                self.issue(
                    IssueKind::ImplicitlyClosed,
                    &format!("<{}> implicitly closed by </{name}>", open.element.name),
                    Span::new(open.start, span.start),
                );
                self.attach_closed(open, span.start);
            }
        }
        if let Some(open) = self.stack_of_open_elements.pop() {
            self.attach_closed(open, span.end);
        }
    }

    /// Close every element still open at end of input, innermost first.
    fn close_remaining(&mut self) {
        let end = self.source.len();
        while let Some(open) = self.stack_of_open_elements.pop() {
            self.issue(
                IssueKind::UnclosedElement,
                &format!("<{}> is never closed", open.element.name),
                Span::new(open.start, end),
            );
            self.attach_closed(open, end);
        }
    }

    fn attach_closed(&mut self, open: OpenElement, end: usize) {
        let OpenElement { mut element, start } = open;
        self.set_position(&mut element, Span::new(start, end));
        self.insert_node(Node::Element(element));
    }

    fn set_position(&self, element: &mut Element, span: Span) {
        let (index, loc) = self.position(span);
        element.index = index;
        element.loc = loc;
    }

    /// Position fields for a node covering `span`, per the tracking flags.
    fn position(&self, span: Span) -> (Option<Span>, Option<Location>) {
        let index = self.config.track_index().then_some(span);
        let loc = self.line_index.as_ref().map(|lines| {
            let to_line_column = |offset| {
                let (line, column) = lines.line_column(offset);
                LineColumn { line, column }
            };
            Location {
                start: to_line_column(span.start),
                end: to_line_column(span.end),
            }
        });
        (index, loc)
    }

    /// Record a parse issue and log it once.
    fn issue(&mut self, kind: IssueKind, message: &str, span: Span) {
        let _ = self.warnings.warn_once("Parser", message);
        self.issues.push(ParseIssue::new(kind, message, span));
    }
}
