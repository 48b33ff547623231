//! Tokens and trivia spans produced by the scanner.

use qlex_core::text::{Position, TextSpan};
use qlex_syntax::{Channel, TokenKind, TriviaKind};

/// A scanned token. The lexeme borrows from the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: &'src str,
    /// Start byte offset in the source text.
    pub start: u32,
    /// End byte offset in the source text (exclusive).
    pub end: u32,
    /// 1-based line of `start`.
    pub line: u32,
    /// 0-based column of `start`, in characters.
    pub column: u32,
    /// Set on trivia materialized as tokens; never set in the primary stream.
    pub suppressed: bool,
}

impl<'src> Token<'src> {
    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start, self.end)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this is an error token for an unrecognized character.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Unknown
    }
}

/// A whitespace or comment span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrivialSpan {
    pub kind: TriviaKind,
    pub start: u32,
    pub end: u32,
    pub channel: Channel,
}

impl TrivialSpan {
    /// Create a span, routed to the channel of its kind.
    pub fn new(kind: TriviaKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            start,
            end,
            channel: kind.channel(),
        }
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start, self.end)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_preserved(&self) -> bool {
        self.channel == Channel::Preserved
    }

    /// The covered text of `source`, the buffer this span was scanned from.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start as usize..self.end as usize]
    }
}
