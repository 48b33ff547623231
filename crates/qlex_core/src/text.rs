//! Source locations: byte spans and line/column positions.

use std::fmt;

/// A byte offset into a source buffer.
pub type TextPos = u32;

/// A byte span `[start, start + length)` in a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end offsets.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end offset (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A line/column position in source text.
///
/// `line` is 1-based; `column` is 0-based and counts characters, not bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of a buffer.
    pub const START: Position = Position { line: 1, column: 0 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line, self.column + 1)
    }
}

/// Maps byte offsets of one buffer to [`Position`]s.
///
/// Line terminators are `\n`, `\r\n` and a lone `\r`; a `\r\n` pair ends a
/// single line.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0u32];
        for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push((i + 1) as u32);
        }
        Self { line_starts }
    }

    /// The [`Position`] of byte offset `pos` in `text`.
    ///
    /// `text` must be the buffer this map was built from.
    pub fn position_of(&self, text: &str, pos: TextPos) -> Position {
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = self.line_starts[line] as usize;
        let end = (pos as usize).min(text.len());
        let column = text
            .get(line_start..end)
            .map_or(end - line_start, |s| s.chars().count());
        Position {
            line: line as u32 + 1,
            column: column as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::from_bounds(5, 15);
        assert_eq!(span, TextSpan::new(5, 10));
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert_eq!(format!("{:?}", span), "5..15");
    }

    #[test]
    fn test_line_map() {
        let text = "line1\nline2\nline3";
        let map = LineMap::new(text);
        assert_eq!(map.position_of(text, 0), Position::START);
        assert_eq!(map.position_of(text, 5), Position::new(1, 5));
        assert_eq!(map.position_of(text, 6), Position::new(2, 0));
        assert_eq!(map.position_of(text, 8), Position::new(2, 2));
        assert_eq!(map.position_of(text, 12), Position::new(3, 0));
    }

    #[test]
    fn test_line_map_crlf_and_lone_cr() {
        let text = "a\r\nb\rc\n";
        let map = LineMap::new(text);
        assert_eq!(map.position_of(text, 1), Position::new(1, 1));
        assert_eq!(map.position_of(text, 3), Position::new(2, 0));
        assert_eq!(map.position_of(text, 5), Position::new(3, 0));
        assert_eq!(map.position_of(text, 7), Position::new(4, 0));
    }

    #[test]
    fn test_position_counts_chars() {
        let text = "§§x";
        let map = LineMap::new(text);
        assert_eq!(map.position_of(text, 4), Position::new(1, 2));
        assert_eq!(Position::new(1, 2).to_string(), "1,3");
    }
}
