//! End-to-end template fixtures.

use pretty_assertions::assert_eq;
use templ_parser::ast::{Element, IfExpression, StringExpression};
use templ_parser::{template, Attribute, Expression, HtmlTemplate, Input, Node, Position, Range};

fn parse(source: &str) -> HtmlTemplate {
    let mut input = Input::new(source);
    template::parse(&mut input)
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
        .expect("expected a template")
}

fn parse_err(source: &str) -> templ_parser::ParseError {
    let mut input = Input::new(source);
    template::parse(&mut input).expect_err("expected a parse error")
}

fn expr(value: &str, from: (usize, usize, usize), to: (usize, usize, usize)) -> Expression {
    Expression::new(
        value,
        Range::new(
            Position::new(from.0, from.1, from.2),
            Position::new(to.0, to.1, to.2),
        ),
    )
}

fn element(name: &str, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    Node::Element(Element {
        name: name.into(),
        attributes,
        children,
    })
}

fn string_expression(expression: Expression) -> Node {
    Node::StringExpression(StringExpression { expression })
}

fn ws(value: &str) -> Node {
    Node::Whitespace(value.into())
}

// =========================================================================
// Signatures
// =========================================================================

#[test]
fn test_template_no_parameters() {
    assert_eq!(
        parse("templ Name() {\n}"),
        HtmlTemplate {
            expression: expr("Name()", (6, 0, 6), (12, 0, 12)),
            children: vec![],
        }
    );
}

#[test]
fn test_template_with_receiver() {
    assert_eq!(
        parse("templ (data Data) Name() {\n}"),
        HtmlTemplate {
            expression: expr("(data Data) Name()", (6, 0, 6), (24, 0, 24)),
            children: vec![],
        }
    );
}

#[test]
fn test_template_no_spaces() {
    assert_eq!(
        parse("templ Name(){\n}"),
        HtmlTemplate {
            expression: expr("Name()", (6, 0, 6), (12, 0, 12)),
            children: vec![],
        }
    );
}

#[test]
fn test_template_single_parameter() {
    assert_eq!(
        parse("templ Name(p Parameter) {\n}"),
        HtmlTemplate {
            expression: expr("Name(p Parameter)", (6, 0, 6), (23, 0, 23)),
            children: vec![],
        }
    );
}

// =========================================================================
// Bodies
// =========================================================================

#[test]
fn test_template_containing_element() {
    assert_eq!(
        parse("templ Name(p Parameter) {\n<span>{ \"span content\" }</span>\n}"),
        HtmlTemplate {
            expression: expr("Name(p Parameter)", (6, 0, 6), (23, 0, 23)),
            children: vec![
                element(
                    "span",
                    vec![],
                    vec![string_expression(expr(
                        "\"span content\"",
                        (34, 1, 8),
                        (48, 1, 22),
                    ))],
                ),
                ws("\n"),
            ],
        }
    );
}

#[test]
fn test_template_containing_nested_elements() {
    let source = "templ Name(p Parameter) {
<div>
  { \"div content\" }
  <span>
\t{ \"span content\" }
  </span>
</div>
}";
    assert_eq!(
        parse(source),
        HtmlTemplate {
            expression: expr("Name(p Parameter)", (6, 0, 6), (23, 0, 23)),
            children: vec![
                element(
                    "div",
                    vec![],
                    vec![
                        ws("\n  "),
                        string_expression(expr("\"div content\"", (36, 2, 4), (49, 2, 17))),
                        ws("\n  "),
                        element(
                            "span",
                            vec![],
                            vec![
                                ws("\n\t"),
                                string_expression(expr(
                                    "\"span content\"",
                                    (64, 4, 3),
                                    (78, 4, 17),
                                )),
                                ws("\n  "),
                            ],
                        ),
                        ws("\n"),
                    ],
                ),
                ws("\n"),
            ],
        }
    );
}

#[test]
fn test_template_containing_if_element() {
    let source = "templ Name(p Parameter) {
\tif p.Test {
\t\t<span>
\t\t\t{ \"span content\" }
\t\t</span>
\t}
}";
    assert_eq!(
        parse(source),
        HtmlTemplate {
            expression: expr("Name(p Parameter)", (6, 0, 6), (23, 0, 23)),
            children: vec![
                ws("\t"),
                Node::If(IfExpression {
                    expression: expr("p.Test", (30, 1, 4), (36, 1, 10)),
                    then_branch: vec![
                        ws("\t\t"),
                        element(
                            "span",
                            vec![],
                            vec![
                                ws("\n\t\t\t"),
                                string_expression(expr(
                                    "\"span content\"",
                                    (53, 3, 5),
                                    (67, 3, 19),
                                )),
                                ws("\n\t\t"),
                            ],
                        ),
                        ws("\n\t"),
                    ],
                    else_branch: vec![],
                }),
                ws("\n"),
            ],
        }
    );
}

#[test]
fn test_template_inputs() {
    let source = "templ Name(p Parameter) {
\t<input type=\"text\" value=\"a\" />
\t<input type=\"text\" value=\"b\" />
}";
    let constant = |name: &str, value: &str| Attribute::Constant {
        name: name.into(),
        value: value.into(),
    };
    assert_eq!(
        parse(source),
        HtmlTemplate {
            expression: expr("Name(p Parameter)", (6, 0, 6), (23, 0, 23)),
            children: vec![
                ws("\t"),
                element(
                    "input",
                    vec![constant("type", "text"), constant("value", "a")],
                    vec![],
                ),
                ws("\n\t"),
                element(
                    "input",
                    vec![constant("type", "text"), constant("value", "b")],
                    vec![],
                ),
                ws("\n"),
            ],
        }
    );
}

#[test]
fn test_template_doctype() {
    assert_eq!(
        parse("templ Name() {\n<!DOCTYPE html>\n}"),
        HtmlTemplate {
            expression: expr("Name()", (6, 0, 6), (12, 0, 12)),
            children: vec![Node::DocType("html".into()), ws("\n")],
        }
    );
}

#[test]
fn test_template_every_node_kind() {
    let source = "templ Page(items []string) {
<!DOCTYPE html>
<html>
\t<style>body { margin: 0; }</style>
\t{! Header(\"t\") }
\t<!Button(\"ok\") />
\tfor _, i := range items {
\t\tswitch i {
\t\t\tcase \"a\":
\t\t\t\t<b>{ i }</b>
\t\t}
\t}
\t{ children... }
</html>
}";
    let template = parse(source);
    let [Node::DocType(_), Node::Whitespace(_), Node::Element(html), Node::Whitespace(_)] =
        &template.children[..]
    else {
        panic!("unexpected children: {:#?}", template.children);
    };
    let kinds: Vec<&str> = html
        .children
        .iter()
        .filter_map(|node| match node {
            Node::RawElement(_) => Some("raw"),
            Node::CallTemplate(_) => Some("call"),
            Node::TemplElement(_) => Some("templ element"),
            Node::For(_) => Some("for"),
            Node::Children => Some("children"),
            Node::Whitespace(_) => None,
            other => panic!("unexpected node {other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec!["raw", "call", "templ element", "for", "children"]);
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn test_template_incomplete_open_tag() {
    let source = "templ Name() {
\t\t\t\t        <div
\t\t\t\t\t\t{\"some string\"}
\t\t\t\t\t</div>
}";
    let err = parse_err(source);
    assert_eq!(err.message, "closing brace not found");
    assert_eq!(err.range.from, Position::new(0, 0, 0));
    assert_eq!(err.range.to.line, 1);
}

#[test]
fn test_template_unterminated_span() {
    let err = parse_err("templ Name(p Parameter) {\n<span\n}");
    assert_eq!(err.message, "closing brace not found");
}

#[test]
fn test_template_error_display() {
    let err = parse_err("templ Name() {\n\t<div>\n}");
    assert_eq!(err.message, "</div> not found");
    assert_eq!(err.to_string(), "parse error at line 2, column 2: </div> not found");
}

#[test]
fn test_template_unclosed_element_points_at_open_tag() {
    let err = parse_err("templ Name() {\n\t<div><p>x</p>\n}");
    assert_eq!(err.message, "</div> not found");
    assert_eq!(err.range.from, Position::new(16, 1, 1));
}

#[test]
fn test_template_multiline_attribute() {
    let template = parse("templ A() {\n<div class=\"a\n b\">x</div>\n}");
    assert_eq!(
        template.children,
        vec![
            element(
                "div",
                vec![Attribute::Constant {
                    name: "class".into(),
                    value: "a\n b".into(),
                }],
                vec![Node::Text("x".into())],
            ),
            ws("\n"),
        ]
    );
}

#[test]
fn test_template_void_element_with_close_tag() {
    let template = parse("templ A() {\n<div><br></br></div>\n}");
    assert_eq!(
        template.children,
        vec![
            element("div", vec![], vec![element("br", vec![], vec![])]),
            ws("\n"),
        ]
    );
}

#[test]
fn test_reparse_is_deterministic() {
    let source = "templ Name(p Parameter) {\n\tif p.A {\n\t\t<a href={ p.URL }>{ p.Name }</a>\n\t} else {\n\t\tnone\n\t}\n}";
    assert_eq!(parse(source), parse(source));
}
