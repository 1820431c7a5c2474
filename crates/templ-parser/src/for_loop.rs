//! `for item := range items { ... }`

use templ_lexer::{scanner, Input};

use crate::ast::{ForExpression, Node};
use crate::conditional::{parse_block_body, parse_block_header};
use crate::ParseResult;

pub fn parse(input: &mut Input<'_>) -> ParseResult<Node> {
    if !scanner::keyword(input, "for") {
        return Ok(None);
    }
    let expression = parse_block_header(input, "for")?;
    let children = parse_block_body(input)?;
    Ok(Some(Node::For(ForExpression {
        expression,
        children,
    })))
}
