//! qlex_scanner: lexer for q source code.
//!
//! Produces a flat token stream from q source text:
//! - reserved words, `.h`/`.j`/`.Q`/`.z` system names and operators, matched
//!   longest-first against a trie built from the static spelling table
//! - positional comments: line, trailing, block, doc and rest-of-file
//! - identifiers and literals through a pluggable [`LiteralScanner`]
//!
//! Scanning never fails. Unrecognized characters and unterminated block
//! comments become diagnostics and the scan carries on.

mod char_codes;
mod literals;
mod output;
mod scanner;
mod token;
mod trie;
mod trivia;

pub use literals::{LiteralScanner, NoLiterals, QLiterals};
pub use output::ScanOutput;
pub use scanner::{scan, scan_with_options, Scanner, MAX_SOURCE_LEN};
pub use token::{Token, TrivialSpan};
pub use trie::{classifier, Classifier, LiteralMatch, TrieBuildError};
pub use trivia::{scan_trivia, TriviaContext, TriviaMatch};
