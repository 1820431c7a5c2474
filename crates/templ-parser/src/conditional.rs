//! `if` / `else if` / `else`
//!
//! ```text
//! if p.Admin {
//!   <b>admin</b>
//! } else if p.Guest {
//!   guest
//! } else {
//!   user
//! }
//! ```

use templ_lexer::{scanner, Input};

use crate::ast::{Expression, IfExpression, Node};
use crate::expression::{self, Terminator};
use crate::node::{self, Until};
use crate::{ParseError, ParseResult};

pub fn parse(input: &mut Input<'_>) -> ParseResult<Node> {
    if !scanner::keyword(input, "if") {
        return Ok(None);
    }
    parse_after_keyword(input).map(|expr| Some(Node::If(expr)))
}

fn parse_after_keyword(input: &mut Input<'_>) -> Result<IfExpression, ParseError> {
    let expression = parse_block_header(input, "if")?;
    let then_branch = parse_block_body(input)?;

    let before_else = input.savepoint();
    scanner::inline_whitespace(input);
    let has_else = input.eat("else") && matches!(input.peek(), Some(' ' | '\t' | '{'));
    if !has_else {
        input.restore(before_else);
        return Ok(IfExpression {
            expression,
            then_branch,
            else_branch: Vec::new(),
        });
    }

    scanner::inline_whitespace(input);
    let else_branch = if scanner::keyword(input, "if") {
        vec![Node::If(parse_after_keyword(input)?)]
    } else if input.starts_with("{") {
        open_block(input);
        parse_block_body(input)?
    } else {
        return Err(ParseError::at("else: missing opening brace", input.position()));
    };

    Ok(IfExpression {
        expression,
        then_branch,
        else_branch,
    })
}

/// Parse `<expr> {` and the line break after it. The keyword has already
/// been consumed.
pub(crate) fn parse_block_header(
    input: &mut Input<'_>,
    keyword: &str,
) -> Result<Expression, ParseError> {
    let from = input.position();
    let expression = expression::capture(input, Terminator::OpenBrace, keyword)?;
    if expression.value.is_empty() {
        return Err(ParseError::at(format!("{keyword}: missing expression"), from));
    }
    open_block(input);
    Ok(expression)
}

/// Consume `{`, trailing spaces and an optional line break.
pub(crate) fn open_block(input: &mut Input<'_>) {
    input.eat("{");
    scanner::inline_whitespace(input);
    scanner::newline(input);
}

/// Parse nodes up to and including the closing `}`.
pub(crate) fn parse_block_body(input: &mut Input<'_>) -> Result<Vec<Node>, ParseError> {
    let children = node::parse_nodes(input, Some(&Until::CloseBrace))?;
    input.eat("}");
    Ok(children)
}
