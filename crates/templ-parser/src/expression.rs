//! Verbatim capture of host-language expressions.
//!
//! Expressions are not parsed. The scanner only tracks enough Go lexical
//! structure (brace depth, paren/bracket nesting, string literals, comments)
//! to find where the expression ends.

use templ_lexer::{scanner, Input};

use crate::ast::Expression;
use crate::ParseError;

/// Where an expression capture stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `{` opening a block: `if x {`, `for ... {`, `switch x {`.
    OpenBrace,
    /// The `}` that balances an already consumed `{`.
    CloseBrace,
    /// `:` ending a `case x:` or `default:` clause.
    CaseColon,
    /// `/>` ending `<!Template() />`.
    SelfClose,
}

impl Terminator {
    pub fn token(self) -> &'static str {
        match self {
            Terminator::OpenBrace => "{",
            Terminator::CloseBrace => "}",
            Terminator::CaseColon => ":",
            Terminator::SelfClose => "/>",
        }
    }

    /// Block headers and case clauses must fit on one line.
    fn is_single_line(self) -> bool {
        matches!(self, Terminator::OpenBrace | Terminator::CaseColon)
    }

    fn matches(self, text: &str, depth: &Depth) -> bool {
        match self {
            Terminator::OpenBrace => text.starts_with('{') && depth.is_zero(),
            Terminator::CloseBrace => text.starts_with('}') && depth.braces == 0,
            Terminator::CaseColon => text.starts_with(':') && depth.is_zero(),
            Terminator::SelfClose => text.starts_with("/>") && depth.is_zero(),
        }
    }
}

#[derive(Debug, Default)]
struct Depth {
    braces: usize,
    nesting: usize,
}

impl Depth {
    fn is_zero(&self) -> bool {
        self.braces == 0 && self.nesting == 0
    }
}

/// Capture text from the cursor up to `terminator`, which is left unconsumed.
///
/// The returned expression is trimmed of surrounding whitespace and its range
/// covers the trimmed text only. `context` prefixes the error message, e.g.
/// `"if: unterminated (missing closing '{')"`.
pub fn capture(
    input: &mut Input<'_>,
    terminator: Terminator,
    context: &str,
) -> Result<Expression, ParseError> {
    let start = input.index();
    let rest = input.rest();
    let mut depth = Depth::default();
    let mut i = 0;

    while let Some(c) = rest[i..].chars().next() {
        let here = &rest[i..];
        if terminator.matches(here, &depth) {
            input.advance(i);
            return Ok(trimmed(input, start, start + i));
        }
        match c {
            '"' | '\'' | '`' => {
                let len = scanner::quoted_len(here).ok_or_else(|| {
                    ParseError::at(
                        format!("{context}: unterminated string literal"),
                        input.position_at(start + i),
                    )
                })?;
                i += len;
                continue;
            }
            '/' if here.starts_with("//") => {
                i += here.find('\n').unwrap_or(here.len());
                continue;
            }
            '/' if here.starts_with("/*") => {
                let len = here.find("*/").ok_or_else(|| {
                    ParseError::at(
                        format!("{context}: unterminated comment"),
                        input.position_at(start + i),
                    )
                })?;
                i += len + 2;
                continue;
            }
            '\n' if terminator.is_single_line() && depth.is_zero() => break,
            '{' => depth.braces += 1,
            '}' => depth.braces = depth.braces.saturating_sub(1),
            '(' | '[' => depth.nesting += 1,
            ')' | ']' => depth.nesting = depth.nesting.saturating_sub(1),
            _ => {}
        }
        i += c.len_utf8();
    }

    Err(ParseError::at(
        format!(
            "{context}: unterminated (missing closing '{}')",
            terminator.token()
        ),
        input.position_at(start),
    ))
}

/// Expression for `from..to` with surrounding whitespace removed.
pub fn trimmed(input: &Input<'_>, from: usize, to: usize) -> Expression {
    let raw = input.slice(from, to);
    let leading = raw.len() - raw.trim_start().len();
    let value = raw.trim();
    Expression::from_span(input, from + leading, from + leading + value.len())
}
