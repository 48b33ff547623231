//! qlex_core: Core utilities for the qlex q tokenizer.
//!
//! Provides byte-offset text spans and the offset to line/column mapping
//! shared by the scanner, diagnostics and CLI crates.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, Position, TextPos, TextSpan};
