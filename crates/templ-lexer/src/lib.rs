//! templ lexer
//!
//! The lexical layer shared by every templ parser: a cursor over the source
//! ([`Input`]), source coordinates ([`Position`], [`Range`]) and the primitive
//! token matchers in [`scanner`] (whitespace, text runs, names, keywords and
//! string literals).
//!
//! # Example
//!
//! ```
//! use templ_lexer::{scanner, Input};
//!
//! let mut input = Input::new("<div class=\"a\">");
//! assert!(input.eat("<"));
//! assert_eq!(scanner::element_name(&mut input), Some("div"));
//! assert_eq!(input.position().col, 4);
//! ```

pub mod input;
pub mod position;
pub mod scanner;

pub use input::{Input, Savepoint};
pub use position::{Position, Range};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("lexer error at {range}: {message}")]
pub struct LexerError {
    pub message: String,
    pub range: Range,
}
