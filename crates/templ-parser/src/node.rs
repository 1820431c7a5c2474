//! The node list parser.
//!
//! Every template body, element body and control-flow branch is a sequence of
//! nodes. [`parse_nodes`] reads such a sequence by trying each node parser in
//! a fixed priority order, falling back to whitespace and then text, until
//! its terminator is seen or nothing more can be consumed.

use templ_lexer::{scanner, Input};

use crate::ast::Node;
use crate::{call, conditional, doctype, element, for_loop, switch};
use crate::{ParseError, ParseResult};

type NodeParser = fn(&mut Input<'_>) -> ParseResult<Node>;

/// Node parsers in priority order. The first match wins.
///
/// Raw elements come before elements so `<style>` bodies are never parsed as
/// markup. `{!` and `{ children... }` come before the catch-all `{ value }`.
const NODE_PARSERS: &[NodeParser] = &[
    doctype::parse,
    element::parse_raw,
    element::parse,
    conditional::parse,
    for_loop::parse,
    switch::parse,
    call::parse_call_template,
    call::parse_templ_element,
    call::parse_children,
    call::parse_string_expression,
];

/// What ends a node list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Until {
    /// `</name>`
    CloseTag(String),
    /// `}` ending a block.
    CloseBrace,
    /// The next `case`, `default:` or the `}` ending a switch.
    CaseClause,
}

impl Until {
    /// Check whether the terminator is at the cursor. The cursor may be left
    /// anywhere; [`parse_nodes`] rewinds it.
    fn probe(&self, input: &mut Input<'_>) -> Result<bool, ParseError> {
        match self {
            Until::CloseTag(name) => element::parse_close_tag(input, name),
            Until::CloseBrace => Ok(input.eat("}")),
            Until::CaseClause => Ok(switch::at_clause_end(input)),
        }
    }

    /// Human readable name used in "not found" errors.
    pub fn name(&self) -> String {
        match self {
            Until::CloseTag(name) => format!("</{name}>"),
            Until::CloseBrace => "closing brace".into(),
            Until::CaseClause => "case, default or closing brace".into(),
        }
    }
}

/// Parse nodes until `until` matches (without consuming it) or, when there is
/// no terminator, until no node parser can make progress.
pub fn parse_nodes(input: &mut Input<'_>, until: Option<&Until>) -> Result<Vec<Node>, ParseError> {
    let start = input.index();
    parse_nodes_since(input, until, start)
}

/// [`parse_nodes`], reporting a missing terminator from byte offset `start`
/// (usually where the enclosing construct opened) to where parsing stalled.
pub fn parse_nodes_since(
    input: &mut Input<'_>,
    until: Option<&Until>,
    start: usize,
) -> Result<Vec<Node>, ParseError> {
    let mut nodes = Vec::new();

    'nodes: loop {
        if let Some(until) = until {
            let probe = input.savepoint();
            let found = until.probe(input)?;
            input.restore(probe);
            if found {
                return Ok(nodes);
            }
        }

        for parse in NODE_PARSERS {
            if let Some(node) = parse(input)? {
                nodes.push(node);
                continue 'nodes;
            }
        }

        let ws = scanner::whitespace(input);
        if !ws.is_empty() {
            push_merged(&mut nodes, Node::Whitespace(ws.to_string()));
            continue;
        }

        let text = scanner::text(input);
        if !text.is_empty() {
            push_merged(&mut nodes, Node::Text(text.to_string()));
            continue;
        }

        // A stray `}` only ends brace-delimited lists.
        if matches!(until, Some(Until::CloseTag(_))) && input.eat("}") {
            push_merged(&mut nodes, Node::Text("}".into()));
            continue;
        }

        return match until {
            None => Ok(nodes),
            Some(until) => Err(ParseError::new(
                format!("{} not found", until.name()),
                input.range_from(start),
            )),
        };
    }
}

/// Append a whitespace or text node, joining it onto a preceding node of the
/// same kind.
fn push_merged(nodes: &mut Vec<Node>, node: Node) {
    if let Some(last) = nodes.last_mut() {
        match (last, &node) {
            (Node::Whitespace(prev), Node::Whitespace(next))
            | (Node::Text(prev), Node::Text(next)) => {
                prev.push_str(next);
                return;
            }
            _ => {}
        }
    }
    nodes.push(node);
}
