//! Trivia classification: whitespace and the four q comment forms.

use crate::TokenKind;
use std::fmt;

/// Which side of the scan output a trivia span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Dropped from the token stream; kept only for reconstruction.
    Discarded,
    /// Kept on the side channel for tools such as documentation extractors.
    Preserved,
}

/// The kind of a trivia span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    /// `/` at the start of a line.
    LineComment,
    /// `/` after a space or tab.
    TrailingComment,
    /// A `/` line through the next `\` line.
    BlockComment,
    /// `//` at the start of a line or after a space or tab.
    DocComment,
    /// A lone `\` as the first line of a file; covers the whole buffer.
    RestOfFileComment,
}

impl TriviaKind {
    /// The channel spans of this kind are routed to.
    pub fn channel(self) -> Channel {
        match self {
            TriviaKind::DocComment => Channel::Preserved,
            _ => Channel::Discarded,
        }
    }

    /// Whether this kind is a comment rather than whitespace.
    pub fn is_comment(self) -> bool {
        self != TriviaKind::Whitespace
    }

    /// The token kind used when this trivia is materialized as a token.
    pub fn to_token_kind(self) -> TokenKind {
        match self {
            TriviaKind::Whitespace => TokenKind::WhitespaceTrivia,
            TriviaKind::LineComment => TokenKind::LineCommentTrivia,
            TriviaKind::TrailingComment => TokenKind::TrailingCommentTrivia,
            TriviaKind::BlockComment => TokenKind::BlockCommentTrivia,
            TriviaKind::DocComment => TokenKind::DocCommentTrivia,
            TriviaKind::RestOfFileComment => TokenKind::RestOfFileCommentTrivia,
        }
    }

    /// Inverse of [`TriviaKind::to_token_kind`].
    pub fn from_token_kind(kind: TokenKind) -> Option<TriviaKind> {
        match kind {
            TokenKind::WhitespaceTrivia => Some(TriviaKind::Whitespace),
            TokenKind::LineCommentTrivia => Some(TriviaKind::LineComment),
            TokenKind::TrailingCommentTrivia => Some(TriviaKind::TrailingComment),
            TokenKind::BlockCommentTrivia => Some(TriviaKind::BlockComment),
            TokenKind::DocCommentTrivia => Some(TriviaKind::DocComment),
            TokenKind::RestOfFileCommentTrivia => Some(TriviaKind::RestOfFileComment),
            _ => None,
        }
    }
}

impl fmt::Display for TriviaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Discarded => write!(f, "discarded"),
            Channel::Preserved => write!(f, "preserved"),
        }
    }
}
