use crate::position::{Position, Range};

/// An opaque cursor snapshot returned by [`Input::savepoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savepoint(usize);

/// A cursor over an immutable source buffer.
///
/// Parsers advance the cursor as they consume text. Backtracking is a matter
/// of taking a [`Savepoint`] and restoring it, which only resets the byte
/// offset.
///
/// Line starts are indexed once up front so that converting any byte offset to
/// a [`Position`] is a binary search rather than a rescan.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    source: &'a str,
    index: usize,
    line_starts: Vec<usize>,
}

impl<'a> Input<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            index: 0,
            line_starts,
        }
    }

    /// Current byte offset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the cursor.
    pub fn position(&self) -> Position {
        self.position_at(self.index)
    }

    /// Position of an arbitrary byte offset in the source.
    pub fn position_at(&self, index: usize) -> Position {
        let line = match self.line_starts.binary_search(&index) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(index, line, index - self.line_starts[line])
    }

    /// Range between a byte offset and the cursor.
    pub fn range_from(&self, start: usize) -> Range {
        Range::new(self.position_at(start), self.position())
    }

    pub fn savepoint(&self) -> Savepoint {
        Savepoint(self.index)
    }

    pub fn restore(&mut self, savepoint: Savepoint) {
        self.index = savepoint.0;
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Consume `token` if the input starts with it.
    pub fn eat(&mut self, token: &str) -> bool {
        if self.starts_with(token) {
            self.index += token.len();
            true
        } else {
            false
        }
    }

    /// Consume `token` if the input starts with it, ignoring ASCII case.
    pub fn eat_ignore_ascii_case(&mut self, token: &str) -> bool {
        let matched = self
            .rest()
            .get(..token.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(token));
        if matched {
            self.index += token.len();
        }
        matched
    }

    /// Move the cursor forward by `bytes`, clamped to the end of the source.
    pub fn advance(&mut self, bytes: usize) {
        self.index = (self.index + bytes).min(self.source.len());
        debug_assert!(
            self.source.is_char_boundary(self.index),
            "cursor moved into the middle of a character"
        );
    }

    /// Consume the longest prefix whose characters all satisfy `pred`.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.index += len;
        &rest[..len]
    }

    /// Source text between two byte offsets.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.source[from..to]
    }
}
