//! Expressions that render something other than markup:
//!
//! ```text
//! {! Header(p.Title) }      call another template
//! <!Button("OK") />         instantiate a template as an element
//! { children... }           render the children passed to this template
//! { p.Name }                render a string value
//! ```

use templ_lexer::{scanner, Input};

use crate::ast::{
    CallTemplateExpression, Expression, Node, StringExpression, TemplElementExpression,
};
use crate::expression::{self, Terminator};
use crate::{ParseError, ParseResult};

/// `{! Template(args) }`
pub fn parse_call_template(input: &mut Input<'_>) -> ParseResult<Node> {
    if !input.eat("{!") {
        return Ok(None);
    }
    let expression = parse_until_close_brace(input, "call template expression")?;
    Ok(Some(Node::CallTemplate(CallTemplateExpression { expression })))
}

/// `<!Template(args) />`
pub fn parse_templ_element(input: &mut Input<'_>) -> ParseResult<Node> {
    let start = input.savepoint();
    if !input.eat("<!") {
        return Ok(None);
    }
    // `<!--` and friends are not template names.
    if !input.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
        input.restore(start);
        return Ok(None);
    }
    let from = input.position();
    let expression =
        expression::capture(input, Terminator::SelfClose, "templ element expression")?;
    input.eat("/>");
    if expression.value.is_empty() {
        return Err(ParseError::at("templ element expression: empty expression", from));
    }
    Ok(Some(Node::TemplElement(TemplElementExpression { expression })))
}

/// `{ children... }`
pub fn parse_children(input: &mut Input<'_>) -> ParseResult<Node> {
    let start = input.savepoint();
    if !input.eat("{") {
        return Ok(None);
    }
    scanner::whitespace(input);
    let matched = input.eat("children...") && {
        scanner::whitespace(input);
        input.eat("}")
    };
    if !matched {
        input.restore(start);
        return Ok(None);
    }
    Ok(Some(Node::Children))
}

/// `{ value }`
pub fn parse_string_expression(input: &mut Input<'_>) -> ParseResult<Node> {
    if !input.eat("{") {
        return Ok(None);
    }
    let expression = parse_until_close_brace(input, "string expression")?;
    Ok(Some(Node::StringExpression(StringExpression { expression })))
}

/// Capture up to the balancing `}` and consume it. The opening token has
/// already been consumed.
fn parse_until_close_brace(input: &mut Input<'_>, context: &str) -> Result<Expression, ParseError> {
    let from = input.position();
    let expression = expression::capture(input, Terminator::CloseBrace, context)?;
    input.eat("}");
    if expression.value.is_empty() {
        return Err(ParseError::new(
            format!("{context}: empty expression"),
            input.range_from(from.index),
        ));
    }
    Ok(expression)
}
