//! `<!DOCTYPE html>`

use templ_lexer::{scanner, Input};

use crate::ast::Node;
use crate::{ParseError, ParseResult};

pub fn parse(input: &mut Input<'_>) -> ParseResult<Node> {
    let start = input.savepoint();
    let from = input.position();
    if !input.eat_ignore_ascii_case("<!DOCTYPE") {
        return Ok(None);
    }
    if scanner::whitespace(input).is_empty() {
        // `<!DOCTYPEfoo` is not a doctype.
        input.restore(start);
        return Ok(None);
    }
    let value = input.take_while(|c| c != '>');
    if !input.eat(">") {
        return Err(ParseError::at("unclosed DOCTYPE (missing closing '>')", from));
    }
    Ok(Some(Node::DocType(value.trim_end().to_string())))
}
