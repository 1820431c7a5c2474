//! Lexical primitives.
//!
//! Each function inspects the cursor and either consumes a token and returns
//! it, or leaves the cursor where it was. None of them allocate.

use crate::input::Input;
use crate::position::Range;
use crate::LexerError;

/// HTML5 void elements (no children, no close tag).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is not template markup.
pub const RAW_ELEMENTS: &[&str] = &["style", "script"];

/// Check if a tag name is an HTML5 void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Check if a tag name is a raw-content element.
pub fn is_raw_element(tag: &str) -> bool {
    RAW_ELEMENTS.contains(&tag)
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub fn is_inline_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

// --- Whitespace ---

/// Consume a maximal run of whitespace. An empty result is still a match.
pub fn whitespace<'a>(input: &mut Input<'a>) -> &'a str {
    input.take_while(is_whitespace)
}

/// Consume spaces and tabs without crossing a line break.
pub fn inline_whitespace<'a>(input: &mut Input<'a>) -> &'a str {
    input.take_while(is_inline_whitespace)
}

/// Consume a single `\n` or `\r\n`.
pub fn newline(input: &mut Input<'_>) -> bool {
    input.eat("\n") || input.eat("\r\n")
}

// --- Text ---

/// Consume prose up to the next structural marker or line break.
///
/// Entities and other escapes are passed through untouched.
pub fn text<'a>(input: &mut Input<'a>) -> &'a str {
    input.take_while(|c| !matches!(c, '<' | '{' | '}' | '\r' | '\n'))
}

// --- Names ---

/// Consume an element name: an ASCII letter followed by letters, digits
/// or hyphens.
pub fn element_name<'a>(input: &mut Input<'a>) -> Option<&'a str> {
    if !input.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(input.take_while(|c| c.is_ascii_alphanumeric() || c == '-'))
}

/// Consume an attribute name such as `class`, `data-id`, `hx-on:click`
/// or `@click`.
pub fn attribute_name<'a>(input: &mut Input<'a>) -> Option<&'a str> {
    let name = input.take_while(|c| {
        !is_whitespace(c) && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '{' | '}' | '?')
    });
    (!name.is_empty()).then_some(name)
}

/// Consume `word` when it is followed by a space or tab.
///
/// Only the word itself is consumed.
pub fn keyword(input: &mut Input<'_>, word: &str) -> bool {
    let rest = input.rest();
    let matched = rest.starts_with(word)
        && rest[word.len()..]
            .chars()
            .next()
            .is_some_and(is_inline_whitespace);
    if matched {
        input.advance(word.len());
    }
    matched
}

// --- Literals ---

/// Consume a double-quoted string literal and return its inner text verbatim.
///
/// A backslash escapes the following character; escapes are not decoded.
/// The literal may span lines, as HTML attribute values can.
/// Returns `Ok(None)` when the cursor is not at a `"`.
pub fn string_literal<'a>(input: &mut Input<'a>) -> Result<Option<&'a str>, LexerError> {
    let rest = input.rest();
    if !rest.starts_with('"') {
        return Ok(None);
    }
    match double_quoted_len(rest) {
        Some(len) => {
            input.advance(len);
            Ok(Some(&rest[1..len - 1]))
        }
        None => Err(LexerError {
            message: "unterminated string literal".into(),
            range: Range::at(input.position()),
        }),
    }
}

fn double_quoted_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Length in bytes of the quoted literal at the start of `text`, including
/// both quotes.
///
/// The opening character is the quote. Backslash escapes are honoured for
/// `"` and `'`; backquoted literals are raw. Interpreted literals may not span
/// lines. Returns `None` when the literal is unterminated.
pub fn quoted_len(text: &str) -> Option<usize> {
    let quote = text.chars().next()?;
    let raw = quote == '`';
    let mut chars = text.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if !raw => {
                chars.next();
            }
            '\n' if !raw => return None,
            c if c == quote => return Some(i + c.len_utf8()),
            _ => {}
        }
    }
    None
}
