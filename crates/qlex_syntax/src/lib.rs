//! qlex_syntax: token kinds shared by the scanner, the CLI and downstream parsers.

pub mod token_kind;
pub mod trivia;

pub use token_kind::{TokenKind, LITERALS};
pub use trivia::{Channel, TriviaKind};
