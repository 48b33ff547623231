//! qlex_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Scan-time problems are never fatal. They are recorded as diagnostics that
//! carry the offending span, its resolved line/column and a message taken
//! from the static message table in [`messages`].

use qlex_core::text::{Position, TextSpan};
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// The structured kind of a scan diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A block comment with no closing line before the end of the buffer.
    UnterminatedComment,
    /// A character matched by no trivia, literal or external scanner rule.
    UnrecognizedCharacter,
    /// A buffer whose byte offsets do not fit in 32 bits.
    SourceTooLarge,
}

impl DiagnosticKind {
    /// The message template for this kind.
    pub fn message(self) -> &'static DiagnosticMessage {
        match self {
            DiagnosticKind::UnterminatedComment => &messages::UNTERMINATED_BLOCK_COMMENT,
            DiagnosticKind::UnrecognizedCharacter => &messages::UNRECOGNIZED_CHARACTER_0,
            DiagnosticKind::SourceTooLarge => &messages::SOURCE_TOO_LARGE_0,
        }
    }

    /// Map a diagnostic code back to its kind.
    pub fn from_code(code: u32) -> Option<DiagnosticKind> {
        match code {
            c if c == messages::UNTERMINATED_BLOCK_COMMENT.code => {
                Some(DiagnosticKind::UnterminatedComment)
            }
            c if c == messages::UNRECOGNIZED_CHARACTER_0.code => {
                Some(DiagnosticKind::UnrecognizedCharacter)
            }
            c if c == messages::SOURCE_TOO_LARGE_0.code => Some(DiagnosticKind::SourceTooLarge),
            _ => None,
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// Line/column of the span start, if known.
    pub position: Option<Position>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic located at `span` / `position`.
    pub fn at(
        span: TextSpan,
        position: Position,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            span: Some(span),
            position: Some(position),
            ..Self::new(message, args)
        }
    }

    /// Attach a file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// The structured kind, when the code belongs to the scanner.
    pub fn kind(&self) -> Option<DiagnosticKind> {
        DiagnosticKind::from_code(self.code)
    }

    /// Byte offset of the span start, if located.
    pub fn offset(&self) -> Option<u32> {
        self.span.map(|s| s.start)
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(position) = self.position {
                write!(f, "({})", position)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} Q{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a scan.
///
/// An optional limit caps how many diagnostics are stored; diagnostics past
/// the limit are counted in [`DiagnosticCollection::dropped`].
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
    limit: Option<usize>,
    dropped: usize,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        if self.limit.is_some_and(|limit| self.diagnostics.len() >= limit) {
            self.dropped += 1;
            return;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.dropped > 0
            || self
                .diagnostics
                .iter()
                .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    /// Number of diagnostics discarded because the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        for diagnostic in other.diagnostics {
            self.add(diagnostic);
        }
        self.dropped += other.dropped;
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_BLOCK_COMMENT: DiagnosticMessage = diag!(1001, Error, "Unterminated block comment: expected a line containing only '\\'.");
    pub const UNRECOGNIZED_CHARACTER_0: DiagnosticMessage = diag!(1002, Error, "Unrecognized character '{0}'.");
    pub const SOURCE_TOO_LARGE_0: DiagnosticMessage = diag!(1003, Error, "Source of {0} bytes exceeds the 4 GiB scanning limit.");

    // ========================================================================
    // CLI (6000-6099)
    // ========================================================================
    pub const SOURCE_NOT_RECONSTRUCTED_0: DiagnosticMessage = diag!(6001, Error, "Scanned spans do not reconstruct the source of '{0}'.");
    pub const DIAGNOSTICS_DROPPED_0: DiagnosticMessage = diag!(6002, Warning, "{0} further diagnostics were not reported.");
}
