use std::fmt;

/// A point in source text.
///
/// `line` and `col` are zero-based; `col` counts bytes from the start of the
/// line, so a tab is one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(index: usize, line: usize, col: usize) -> Self {
        Self { index, line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Humans count from one.
        write!(f, "line {}, column {}", self.line + 1, self.col + 1)
    }
}

/// A span of source text between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    pub fn new(from: Position, to: Position) -> Self {
        debug_assert!(from.index <= to.index, "range ends before it starts");
        Self { from, to }
    }

    /// A zero-width range at a single position.
    pub fn at(position: Position) -> Self {
        Self {
            from: position,
            to: position,
        }
    }

    pub fn len(&self) -> usize {
        self.to.index - self.from.index
    }

    pub fn is_empty(&self) -> bool {
        self.from.index == self.to.index
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.from.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(7, 1, 3).to_string(), "line 2, column 4");
    }

    #[test]
    fn test_range_len() {
        let range = Range::new(Position::new(6, 0, 6), Position::new(12, 0, 12));
        assert_eq!(range.len(), 6);
        assert!(!range.is_empty());
        assert!(Range::at(Position::new(3, 0, 3)).is_empty());
    }

    #[test]
    fn test_range_display_uses_start() {
        let range = Range::new(Position::new(30, 1, 4), Position::new(36, 1, 10));
        assert_eq!(range.to_string(), "line 2, column 5");
    }
}
