//! Element attributes.
//!
//! ```text
//! <input type="text" value={ p.Value } disabled?={ p.Locked } required { attrs... } />
//! ```

use templ_lexer::{scanner, Input, Range};

use crate::ast::{Attribute, Expression};
use crate::expression::{self, Terminator};
use crate::{ParseError, ParseResult};

/// Parse a single attribute at the cursor.
///
/// Whitespace separating attributes is handled by the element parser.
pub fn parse(input: &mut Input<'_>) -> ParseResult<Attribute> {
    if input.starts_with("{") {
        return parse_spread(input);
    }

    let from = input.position();
    let Some(name) = scanner::attribute_name(input) else {
        return Ok(None);
    };
    let name = name.to_string();

    if input.eat("?={") {
        let expression = parse_braced(input, &name)?;
        return Ok(Some(Attribute::BoolExpression { name, expression }));
    }
    if !input.eat("=") {
        return Ok(Some(Attribute::BoolConstant { name }));
    }
    if input.eat("{") {
        let expression = parse_braced(input, &name)?;
        return Ok(Some(Attribute::Expression { name, expression }));
    }
    match scanner::string_literal(input)? {
        Some(value) => Ok(Some(Attribute::Constant {
            name,
            value: value.to_string(),
        })),
        None => Err(ParseError::at(
            format!("attribute `{name}`: expected a quoted value or {{ expression }}"),
            from,
        )),
    }
}

/// The rest of `{ expr }` after the opening brace.
fn parse_braced(input: &mut Input<'_>, name: &str) -> Result<Expression, ParseError> {
    let context = format!("attribute `{name}`");
    let expression = expression::capture(input, Terminator::CloseBrace, &context)?;
    input.eat("}");
    if expression.value.is_empty() {
        return Err(ParseError::new(
            format!("{context}: empty expression"),
            expression.range,
        ));
    }
    Ok(expression)
}

/// `{ attrs... }`
fn parse_spread(input: &mut Input<'_>) -> ParseResult<Attribute> {
    let start = input.savepoint();
    input.eat("{");
    let Ok(captured) = expression::capture(input, Terminator::CloseBrace, "spread attributes")
    else {
        input.restore(start);
        return Ok(None);
    };
    let Some(value) = captured.value.strip_suffix("...") else {
        input.restore(start);
        return Ok(None);
    };
    input.eat("}");

    let value = value.trim_end();
    let from = captured.range.from;
    let to = input.position_at(from.index + value.len());
    Ok(Some(Attribute::Spread {
        expression: Expression::new(value, Range::new(from, to)),
    }))
}
