//! HTML elements.
//!
//! ```text
//! <div class="a">children</div>
//! <input type="text" />
//! <br>
//! <style>raw contents</style>
//! ```

use templ_lexer::{scanner, Input};

use crate::ast::{Attribute, Element, Node, RawElement};
use crate::attribute;
use crate::node::{self, Until};
use crate::{ParseError, ParseResult};

/// How an open tag ended.
enum OpenTagEnd {
    /// `/>`
    SelfClosing,
    /// `>`
    Open,
}

struct OpenTag {
    name: String,
    attributes: Vec<Attribute>,
    end: OpenTagEnd,
}

/// Parse `<name attrs...>` or `<name attrs.../>`.
///
/// An open tag that never reaches `>` is a non-match: the enclosing node list
/// then fails at this position with its own, more useful message.
fn parse_open_tag(input: &mut Input<'_>) -> ParseResult<OpenTag> {
    let start = input.savepoint();
    if !input.eat("<") {
        return Ok(None);
    }
    let Some(name) = scanner::element_name(input) else {
        input.restore(start);
        return Ok(None);
    };
    let name = name.to_string();

    let mut attributes = Vec::new();
    loop {
        let before = input.savepoint();
        if scanner::whitespace(input).is_empty() {
            break;
        }
        match attribute::parse(input)? {
            Some(attr) => attributes.push(attr),
            None => {
                input.restore(before);
                break;
            }
        }
    }

    scanner::whitespace(input);
    let end = if input.eat("/>") {
        OpenTagEnd::SelfClosing
    } else if input.eat(">") {
        OpenTagEnd::Open
    } else {
        input.restore(start);
        return Ok(None);
    };

    Ok(Some(OpenTag {
        name,
        attributes,
        end,
    }))
}

/// Parse an element and its children.
pub fn parse(input: &mut Input<'_>) -> ParseResult<Node> {
    let start = input.savepoint();
    let from = input.index();
    let Some(tag) = parse_open_tag(input)? else {
        return Ok(None);
    };
    if scanner::is_raw_element(&tag.name) {
        // Raw elements are handled by `parse_raw`.
        input.restore(start);
        return Ok(None);
    }

    let children = match tag.end {
        OpenTagEnd::SelfClosing => Vec::new(),
        OpenTagEnd::Open if scanner::is_void_element(&tag.name) => {
            // `<br></br>` is tolerated.
            eat_close_tag(input, &tag.name);
            Vec::new()
        }
        OpenTagEnd::Open => {
            let until = Until::CloseTag(tag.name.clone());
            let children = node::parse_nodes_since(input, Some(&until), from)?;
            parse_close_tag(input, &tag.name)?;
            children
        }
    };

    Ok(Some(Node::Element(Element {
        name: tag.name,
        attributes: tag.attributes,
        children,
    })))
}

/// Parse a `<style>` or `<script>` element, capturing its content verbatim.
pub fn parse_raw(input: &mut Input<'_>) -> ParseResult<Node> {
    let start = input.savepoint();
    let from = input.position();
    let Some(tag) = parse_open_tag(input)? else {
        return Ok(None);
    };
    if !scanner::is_raw_element(&tag.name) {
        input.restore(start);
        return Ok(None);
    }

    let contents = match tag.end {
        OpenTagEnd::SelfClosing => String::new(),
        OpenTagEnd::Open => {
            let close = format!("</{}>", tag.name);
            let Some(len) = input.rest().find(&close) else {
                return Err(ParseError::at(
                    format!("<{}>: unterminated (missing closing '{close}')", tag.name),
                    from,
                ));
            };
            let contents = input.rest()[..len].to_string();
            input.advance(len + close.len());
            contents
        }
    };

    Ok(Some(Node::RawElement(RawElement {
        name: tag.name,
        attributes: tag.attributes,
        contents,
    })))
}

/// Consume `</name>` if it is at the cursor.
fn eat_close_tag(input: &mut Input<'_>, name: &str) -> bool {
    let start = input.savepoint();
    let matched = input.eat("</") && {
        scanner::whitespace(input);
        scanner::element_name(input) == Some(name)
    } && {
        scanner::whitespace(input);
        input.eat(">")
    };
    if !matched {
        input.restore(start);
    }
    matched
}

/// Probe for `</name>` at the cursor.
///
/// Returns `Ok(true)` and consumes the tag when it closes `name`. A close tag
/// for any other element is an error, so that `<div></span>` is reported
/// where the mismatch happens.
pub fn parse_close_tag(input: &mut Input<'_>, name: &str) -> Result<bool, ParseError> {
    let start = input.savepoint();
    let from = input.position();
    if !input.eat("</") {
        return Ok(false);
    }
    scanner::whitespace(input);
    let Some(found) = scanner::element_name(input) else {
        input.restore(start);
        return Ok(false);
    };
    scanner::whitespace(input);
    if !input.eat(">") {
        input.restore(start);
        return Ok(false);
    }
    if found != name {
        return Err(ParseError::new(
            format!("<{name}>: mismatched end tag, expected '</{name}>', got '</{found}>'"),
            input.range_from(from.index),
        ));
    }
    Ok(true)
}
