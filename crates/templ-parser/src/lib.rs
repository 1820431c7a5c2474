//! templ Parser
//!
//! Parses templ source (Go code interleaved with `templ` blocks of HTML-like
//! markup) into a positioned Abstract Syntax Tree.
//!
//! The parser is scannerless: every construct has its own parse function that
//! works directly on a [`templ_lexer::Input`] cursor. A parse function returns
//! one of three outcomes (see [`ParseResult`]):
//!
//! - `Ok(Some(node))`: the construct was recognised and consumed;
//! - `Ok(None)`: the input does not start the construct, nothing consumed;
//! - `Err(error)`: the construct started but is malformed.
//!
//! [`node::parse_nodes`] tries the constructs in a fixed priority order, so a
//! non-match must never move the cursor.

pub mod ast;
pub mod attribute;
pub mod call;
pub mod conditional;
pub mod doctype;
pub mod element;
pub mod expression;
pub mod for_loop;
pub mod node;
pub mod parser;
pub mod switch;
pub mod template;

pub use ast::{Attribute, Expression, HtmlTemplate, Node, TemplateFile, TemplateFileNode};
pub use parser::Parser;
pub use templ_lexer::{Input, Position, Range};

use templ_lexer::LexerError;

/// Outcome of a single parse function.
pub type ParseResult<T> = Result<Option<T>, ParseError>;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parse error at {range}: {message}")]
pub struct ParseError {
    pub message: String,
    pub range: Range,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: Range) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }

    /// An error at a single position.
    pub fn at(message: impl Into<String>, position: Position) -> Self {
        Self::new(message, Range::at(position))
    }
}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        Self {
            message: e.message,
            range: e.range,
        }
    }
}
