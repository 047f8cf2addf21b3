//! Integration tests for the tree builder.

use pretty_assertions::assert_eq;
use renit_parser::{Document, Node, ParseOptions, parse, parse_with};
use serde_json::{Value, json};

/// Helper to serialize a document the way downstream tools receive it
fn to_json(document: &Document) -> Value {
    serde_json::to_value(document).unwrap()
}

/// Helper to build an element in its JSON shape
fn element(name: &str, attributes: Value, children: Value) -> Value {
    json!({
        "type": "Element",
        "name": name,
        "voidElement": false,
        "attributes": attributes,
        "children": children,
    })
}

/// Helper to build a text node in its JSON shape
fn text(content: &str) -> Value {
    json!({ "type": "Text", "content": content })
}

/// Helper to build a comment node in its JSON shape
fn comment(content: &str) -> Value {
    json!({ "type": "Comment", "content": content })
}

fn document(children: Value) -> Value {
    json!({ "type": "Document", "children": children })
}

#[test]
fn test_single_element() {
    let ast = parse("<h1>Hello World!</h1>");
    assert_eq!(
        to_json(&ast),
        document(json!([element("h1", json!([]), json!([text("Hello World!")]))]))
    );
}

#[test]
fn test_nested_elements() {
    let ast = parse("<div><h1>Hello World!</h1></div>");
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([]),
            json!([element("h1", json!([]), json!([text("Hello World!")]))])
        )]))
    );
}

#[test]
fn test_void_elements() {
    let ast = parse(r#"<div><h1>Hello World!</h1><img src="renit.png" /></div>"#);
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([]),
            json!([
                element("h1", json!([]), json!([text("Hello World!")])),
                {
                    "type": "Element",
                    "name": "img",
                    "voidElement": true,
                    "attributes": [{ "type": "Attribute", "name": "src", "value": "renit.png" }],
                    "children": [],
                },
            ])
        )]))
    );
}

#[test]
fn test_self_closing_custom_tag_is_void() {
    let ast = parse(r#"<div><component title="Hi!" /></div>"#);
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([]),
            json!([{
                "type": "Element",
                "name": "component",
                "voidElement": true,
                "attributes": [{ "type": "Attribute", "name": "title", "value": "Hi!" }],
                "children": [],
            }])
        )]))
    );
}

#[test]
fn test_void_tag_without_slash() {
    let ast = parse("<p>a<br>b</p>");
    let p = ast.find_element("p").unwrap();
    assert_eq!(p.children.len(), 3);
    let br = p.children[1].as_element().unwrap();
    assert!(br.void_element);
    assert!(br.children.is_empty());
}

#[test]
fn test_attribute_forms() {
    let ast = parse(r#"<a href="/home.html" class="btn mt-2" data-id=5 disabled {value}>HOME</a>"#);
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "a",
            json!([
                { "type": "Attribute", "name": "href", "value": "/home.html" },
                { "type": "Attribute", "name": "class", "value": "btn mt-2" },
                { "type": "Attribute", "name": "data-id", "value": "5" },
                { "type": "Attribute", "name": "disabled" },
                { "type": "Attribute", "name": "value", "value": "{value}" },
            ]),
            json!([text("HOME")])
        )]))
    );
}

#[test]
fn test_affix_attributes() {
    let options = ParseOptions::new().with_affix(true);
    let ast = parse_with(
        r#"<div @name="form" class:visible={display}><input :value={number} /></div>"#,
        &options,
    );
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([
                { "type": "Attribute", "prefix": "@", "name": "name", "value": "form" },
                {
                    "type": "Attribute",
                    "name": "class",
                    "suffix": [{ "prefix": ":", "name": "visible" }],
                    "value": "{display}",
                },
            ]),
            json!([{
                "type": "Element",
                "name": "input",
                "voidElement": true,
                "attributes": [
                    { "type": "Attribute", "prefix": ":", "name": "value", "value": "{number}" },
                ],
                "children": [],
            }])
        )]))
    );
}

#[test]
fn test_added_affix() {
    let options = ParseOptions::new().with_affix(true).add_affixes(["!"]);
    let ast = parse_with("<div !variable=1>OK</div>", &options);
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([{ "type": "Attribute", "prefix": "!", "name": "variable", "value": "1" }]),
            json!([text("OK")])
        )]))
    );
}

#[test]
fn test_affix_disabled_keeps_full_name() {
    let options = ParseOptions::new().with_affix(false);
    let ast = parse_with("<div @click={go} class:active></div>", &options);
    let div = ast.find_element("div").unwrap();
    let names: Vec<&str> = div.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["@click", "class:active"]);
    assert!(div.attributes.iter().all(|a| a.prefix.is_none() && a.suffix.is_none()));
}

#[test]
fn test_whitespace_preserved_by_default() {
    let ast = parse(
        "
      <div>
        <p> whitespace </p>
      </div>
    ",
    );
    assert_eq!(
        to_json(&ast),
        document(json!([
            text("\n      "),
            element(
                "div",
                json!([]),
                json!([
                    text("\n        "),
                    element("p", json!([]), json!([text(" whitespace ")])),
                    text("\n      "),
                ])
            ),
            text("\n    "),
        ]))
    );
}

#[test]
fn test_whitespace_removed_and_trimmed() {
    let options = ParseOptions::new().with_whitespace(false).with_trim(true);
    let ast = parse_with(
        "
      <div>
        <p>  renit <span> ! </span>  </p>
        <script>
          console.log();
        </script>
      </div>
    ",
        &options,
    );
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "div",
            json!([]),
            json!([
                element(
                    "p",
                    json!([]),
                    json!([text("renit"), element("span", json!([]), json!([text("!")]))])
                ),
                element("script", json!([]), json!([text("console.log();")])),
            ])
        )]))
    );
}

#[test]
fn test_whitespace_removed_without_trim() {
    let options = ParseOptions::new().with_whitespace(false);
    let ast = parse_with("<p>  renit </p>\n<p>\n</p>", &options);
    assert_eq!(
        to_json(&ast),
        document(json!([
            element("p", json!([]), json!([text("  renit ")])),
            element("p", json!([]), json!([])),
        ]))
    );
}

#[test]
fn test_special_tags_are_not_parsed() {
    let ast = parse(
        r#"
      <div>
        <p>parse</p>
        <script lang="ts">
          console.log("<p>not parse</p>")
        </script>
        <!-- single line comment <p>not parse</p> -->
        <style type="text/css">
          .title {
            content: "<p>not parse</p>"
          }
        </style>
        <!--
          multiple line comment
          <p>not parse</p>
        -->
      </div>
    "#,
    );
    assert_eq!(
        to_json(&ast),
        document(json!([
            text("\n      "),
            element(
                "div",
                json!([]),
                json!([
                    text("\n        "),
                    element("p", json!([]), json!([text("parse")])),
                    text("\n        "),
                    element(
                        "script",
                        json!([{ "type": "Attribute", "name": "lang", "value": "ts" }]),
                        json!([text("\n          console.log(\"<p>not parse</p>\")\n        ")])
                    ),
                    text("\n        "),
                    comment(" single line comment <p>not parse</p> "),
                    text("\n        "),
                    element(
                        "style",
                        json!([{ "type": "Attribute", "name": "type", "value": "text/css" }]),
                        json!([text(
                            "\n          .title {\n            content: \"<p>not parse</p>\"\n          }\n        "
                        )])
                    ),
                    text("\n        "),
                    comment("\n          multiple line comment\n          <p>not parse</p>\n        "),
                    text("\n      "),
                ])
            ),
            text("\n    "),
        ]))
    );
}

#[test]
fn test_added_special_tag() {
    let options = ParseOptions::new().add_special_tags(["portal"]);
    let ast = parse_with(
        r#"
      <div>
        <portal target="document.body">
          <p>not {parse}</p>
        </portal>
      </div>
    "#,
        &options,
    );
    assert_eq!(
        to_json(&ast),
        document(json!([
            text("\n      "),
            element(
                "div",
                json!([]),
                json!([
                    text("\n        "),
                    element(
                        "portal",
                        json!([{ "type": "Attribute", "name": "target", "value": "document.body" }]),
                        json!([text("\n          <p>not {parse}</p>\n        ")])
                    ),
                    text("\n      "),
                ])
            ),
            text("\n    "),
        ]))
    );
}

#[test]
fn test_text_outside_tags() {
    let ast = parse(
        "
      <div>div text</div> outside
      text <p>paragraph text</p>
    ",
    );
    assert_eq!(
        to_json(&ast),
        document(json!([
            text("\n      "),
            element("div", json!([]), json!([text("div text")])),
            text(" outside\n      text "),
            element("p", json!([]), json!([text("paragraph text")])),
            text("\n    "),
        ]))
    );
}

#[test]
fn test_empty_input() {
    let ast = parse("");
    assert!(ast.children.is_empty());
    assert_eq!(to_json(&ast), document(json!([])));
}

#[test]
fn test_empty_special_block_has_no_children() {
    let ast = parse("<script></script>");
    let script = ast.find_element("script").unwrap();
    assert!(!script.void_element);
    assert!(script.children.is_empty());
}

#[test]
fn test_special_tag_self_closing_is_void() {
    let ast = parse(r#"<script src="app.js" /><p>after</p>"#);
    let script = ast.children[0].as_element().unwrap();
    assert_eq!(script.name, "script");
    assert!(script.void_element);
    assert_eq!(ast.children[1].as_element().unwrap().name, "p");
}

#[test]
fn test_special_tag_without_closing_tag_is_ordinary() {
    let ast = parse("<textarea><b>bold</b>");
    let textarea = ast.find_element("textarea").unwrap();
    assert_eq!(textarea.children.len(), 1);
    assert_eq!(textarea.elements().next().unwrap().name, "b");
}

#[test]
fn test_escapable_raw_text_is_verbatim() {
    let ast = parse("<title>a &amp; <b></title>");
    assert_eq!(ast.find_element("title").unwrap().text_content(), "a &amp; <b>");
}

#[test]
fn test_comment_never_trimmed() {
    let options = ParseOptions::new().with_whitespace(false).with_trim(true);
    let ast = parse_with("<!--  x  -->", &options);
    assert_eq!(ast.children, [Node::Comment(renit_parser::Comment::new("  x  "))]);
}

#[test]
fn test_gt_inside_attribute_values() {
    let ast = parse(r#"<button title="a > b" on:click={() => n > 1}>go</button>"#);
    let button = ast.find_element("button").unwrap();
    assert_eq!(button.attributes.len(), 2);
    assert_eq!(button.attributes[0].value.as_deref(), Some("a > b"));
    assert_eq!(button.attributes[1].value.as_deref(), Some("{() => n > 1}"));
    assert_eq!(button.text_content(), "go");
}

#[test]
fn test_mismatched_close_pops_to_matching_element() {
    let ast = parse("<div><span>a</div>b");
    assert_eq!(
        to_json(&ast),
        document(json!([
            element(
                "div",
                json!([]),
                json!([element("span", json!([]), json!([text("a")]))])
            ),
            text("b"),
        ]))
    );
}

#[test]
fn test_unmatched_close_is_ignored() {
    let ast = parse("</p><div>x</span></div>");
    assert_eq!(
        to_json(&ast),
        document(json!([element("div", json!([]), json!([text("x")]))]))
    );
}

#[test]
fn test_unclosed_elements_keep_children() {
    let ast = parse("<ul><li>one<li>two");
    assert_eq!(
        to_json(&ast),
        document(json!([element(
            "ul",
            json!([]),
            json!([element(
                "li",
                json!([]),
                json!([text("one"), element("li", json!([]), json!([text("two")]))])
            )])
        )]))
    );
}

#[test]
fn test_close_tag_names_are_case_sensitive() {
    let ast = parse("<Card>x</card></Card>");
    let card = ast.find_element("Card").unwrap();
    assert_eq!(card.text_content(), "x");
    assert_eq!(ast.children.len(), 1);
}

#[test]
fn test_literal_lt_is_text() {
    let ast = parse("<p>1 < 2 and 3 > 2</p>");
    assert_eq!(ast.find_element("p").unwrap().text_content(), "1 < 2 and 3 > 2");
}

#[test]
fn test_doctype_is_text() {
    let ast = parse("<!DOCTYPE html><p>x</p>");
    assert_eq!(ast.children[0].as_text(), Some("<!DOCTYPE html>"));
}

#[test]
fn test_unterminated_markup_is_text() {
    let ast = parse(r#"<p>x</p><a href="open>tail"#);
    assert_eq!(ast.children.len(), 2);
    assert_eq!(ast.children[1].as_text(), Some(r#"<a href="open>tail"#));
}

#[test]
fn test_unterminated_construct_makes_the_rest_text() {
    let ast = parse(r#"<p>x</p><a title="open>tail<b>bold</b>"#);
    assert_eq!(ast.children.len(), 2);
    assert_eq!(ast.children[1].as_text(), Some(r#"<a title="open>tail<b>bold</b>"#));

    let ast = parse("<i>a</i><!-- open <b>b</b>");
    assert_eq!(ast.children[1].as_text(), Some("<!-- open <b>b</b>"));
}

#[test]
fn test_unquoted_value_before_self_closing_slash() {
    let ast = parse("<Comp x=1/><p>after</p>");
    assert_eq!(ast.children.len(), 2);
    let comp = ast.children[0].as_element().unwrap();
    assert!(comp.void_element);
    assert_eq!(comp.attribute("x").and_then(|a| a.value.as_deref()), Some("1"));
    assert!(comp.children.is_empty());
    assert_eq!(ast.children[1].as_element().unwrap().text_content(), "after");

    let ast = parse("<a href=/docs/>");
    let a = ast.children[0].as_element().unwrap();
    assert!(a.void_element);
    assert_eq!(a.attributes[0].value.as_deref(), Some("/docs"));
}

#[test]
fn test_apostrophe_in_expression_value() {
    let ast = parse("<p title={isn't}>it's</p>");
    let p = ast.find_element("p").unwrap();
    assert_eq!(p.attributes[0].value.as_deref(), Some("{isn't}"));
    assert_eq!(p.text_content(), "it's");
}

#[test]
fn test_repeated_unfinished_markup_parses_in_linear_time() {
    use std::time::{Duration, Instant};

    const REPEAT: usize = 20_000;

    // Special names with no closing tag; void here so the tree stays flat.
    let source = "<textarea>x".repeat(REPEAT);
    let options = ParseOptions::new().with_void_tags(["textarea"]);
    let started = Instant::now();
    let ast = parse_with(&source, &options);
    assert_eq!(ast.children.len(), 2 * REPEAT);
    assert!(ast.children[0].as_element().unwrap().void_element);

    for unit in ["<p {", "<p \"", "<p ", "<em", "<!--"] {
        let source = unit.repeat(REPEAT);
        let ast = parse(&source);
        assert_eq!(ast.children.len(), 1, "{unit}");
        assert_eq!(ast.children[0].as_text(), Some(source.as_str()));
    }
    assert!(started.elapsed() < Duration::from_secs(5), "took {:?}", started.elapsed());
}

#[test]
fn test_find_element_depth_first() {
    let ast = parse("<div><p>first</p></div><p>second</p>");
    assert_eq!(ast.find_element("p").unwrap().text_content(), "first");
    assert_eq!(ast.elements().count(), 2);
    assert_eq!(ast.text_content(), "firstsecond");
}
