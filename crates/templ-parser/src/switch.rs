//! `switch` / `case` / `default`
//!
//! ```text
//! switch p.Kind {
//!   case "a":
//!     <b>A</b>
//!   default:
//!     other
//! }
//! ```

use templ_lexer::{scanner, Input};

use crate::ast::{CaseExpression, Expression, Node, SwitchExpression};
use crate::conditional::open_block;
use crate::expression::{self, Terminator};
use crate::node::{self, Until};
use crate::{ParseError, ParseResult};

pub fn parse(input: &mut Input<'_>) -> ParseResult<Node> {
    if !scanner::keyword(input, "switch") {
        return Ok(None);
    }
    // `switch {` is valid Go, so the expression may be empty.
    let expression = expression::capture(input, Terminator::OpenBrace, "switch")?;
    open_block(input);

    let mut cases = Vec::new();
    loop {
        scanner::whitespace(input);
        if input.eat("}") {
            break;
        }
        match parse_case(input)? {
            Some(case) => cases.push(case),
            None if input.is_at_end() => {
                return Err(ParseError::new(
                    "switch: closing brace not found",
                    expression.range,
                ))
            }
            None => {
                return Err(ParseError::at(
                    "switch: expected case, default or closing brace",
                    input.position(),
                ))
            }
        }
    }

    Ok(Some(Node::Switch(SwitchExpression { expression, cases })))
}

/// Parse a `case x:` or `default:` clause and its body.
fn parse_case(input: &mut Input<'_>) -> ParseResult<CaseExpression> {
    let from = input.index();
    if scanner::keyword(input, "case") {
        let value = expression::capture(input, Terminator::CaseColon, "case")?;
        if value.value.is_empty() {
            return Err(ParseError::at("case: missing expression", input.position_at(from)));
        }
        input.eat(":");
    } else if at_default(input) {
        input.eat("default");
        scanner::inline_whitespace(input);
        input.eat(":");
    } else {
        return Ok(None);
    }
    let expression = Expression::from_span(input, from, input.index());

    scanner::inline_whitespace(input);
    scanner::newline(input);
    let children = node::parse_nodes(input, Some(&Until::CaseClause))?;

    Ok(Some(CaseExpression {
        expression,
        children,
    }))
}

fn at_default(input: &Input<'_>) -> bool {
    input
        .rest()
        .strip_prefix("default")
        .is_some_and(|rest| rest.trim_start_matches(scanner::is_inline_whitespace).starts_with(':'))
}

/// Whether the cursor is at the start of the next clause or at the `}`
/// closing the switch.
pub(crate) fn at_clause_end(input: &mut Input<'_>) -> bool {
    scanner::keyword(input, "case") || at_default(input) || input.eat("}")
}
