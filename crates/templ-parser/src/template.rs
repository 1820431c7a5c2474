//! `templ` blocks.
//!
//! ```text
//! templ Func(p Parameter) {
//! templ (data Data) Func(p Parameter) {
//! templ (data []string) Func(p Parameter) {
//! ```
//!
//! Everything between `templ ` and the `{` that ends the line is the
//! signature. It is host-language code and is captured without being parsed.

use templ_lexer::{scanner, Input};

use crate::ast::{Expression, HtmlTemplate};
use crate::node;
use crate::{ParseError, ParseResult};

/// Parse the `templ Name(params) {` line, including its line break.
pub fn parse_expression(input: &mut Input<'_>) -> ParseResult<Expression> {
    if !input.eat("templ ") {
        return Ok(None);
    }

    let from = input.position();
    let Some(len) = signature_len(input.rest()) else {
        return Err(ParseError::at(
            "templ: unterminated (missing closing '{\\n')",
            from,
        ));
    };
    let expression = Expression::from_span(input, from.index, from.index + len);
    input.advance(len);

    let brace = input.position();
    scanner::inline_whitespace(input);
    if !input.eat("{") {
        return Err(ParseError::at("templ: unterminated (missing closing '{')", brace));
    }
    scanner::inline_whitespace(input);
    if !scanner::newline(input) {
        return Err(ParseError::at("templ: missing line break after '{'", input.position()));
    }

    Ok(Some(expression))
}

/// Length of the signature at the start of `text`: everything before the
/// first `{` that is followed by optional spaces and a line break, minus the
/// padding in front of that `{`.
///
/// The scan is deliberately not depth-aware, so a signature cannot contain
/// `{` at the end of a line.
fn signature_len(text: &str) -> Option<usize> {
    text.match_indices('{')
        .find(|(i, _)| {
            let after = text[i + 1..].trim_start_matches(scanner::is_inline_whitespace);
            after.starts_with('\n') || after.starts_with("\r\n")
        })
        .map(|(i, _)| text[..i].trim_end_matches(scanner::is_inline_whitespace).len())
}

/// Parse a whole `templ` block up to and including its closing `}`.
///
/// A missing `}` is reported from the `templ` keyword to where the body
/// stopped parsing.
pub fn parse(input: &mut Input<'_>) -> ParseResult<HtmlTemplate> {
    let start = input.index();
    let Some(expression) = parse_expression(input)? else {
        return Ok(None);
    };

    let children = node::parse_nodes(input, None)?;
    if !input.eat("}") {
        return Err(ParseError::new(
            "closing brace not found",
            input.range_from(start),
        ));
    }

    log::debug!(
        "parsed template `{}` with {} top-level nodes",
        expression.value,
        children.len()
    );
    Ok(Some(HtmlTemplate {
        expression,
        children,
    }))
}
