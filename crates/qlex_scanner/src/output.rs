//! The result of a complete scan.

use crate::token::{Token, TrivialSpan};
use qlex_core::text::LineMap;
use qlex_diagnostics::DiagnosticCollection;

/// Tokens, trivia and diagnostics for one buffer.
#[derive(Debug, Clone)]
pub struct ScanOutput<'src> {
    pub(crate) source: &'src str,
    pub(crate) tokens: Vec<Token<'src>>,
    pub(crate) trivia: Vec<TrivialSpan>,
    pub(crate) preserved: Vec<TrivialSpan>,
    pub(crate) diagnostics: DiagnosticCollection,
}

impl<'src> ScanOutput<'src> {
    /// The scanned buffer.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The primary token stream. Never contains trivia.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'src>> {
        self.tokens
    }

    /// Recorded trivia spans in offset order.
    pub fn trivia(&self) -> &[TrivialSpan] {
        &self.trivia
    }

    /// Preserved spans (doc comments) in offset order.
    pub fn preserved(&self) -> &[TrivialSpan] {
        &self.preserved
    }

    /// The preserved span covering `offset`, if any.
    pub fn preserved_at(&self, offset: u32) -> Option<&TrivialSpan> {
        let idx = self.preserved.partition_point(|span| span.end <= offset);
        self.preserved
            .get(idx)
            .filter(|span| span.span().contains(offset))
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Tokens and recorded trivia merged in offset order. Trivia become
    /// tokens of their trivia kind with `suppressed` set.
    pub fn tokens_with_trivia(&self) -> Vec<Token<'src>> {
        let line_map = LineMap::new(self.source);
        let mut merged = Vec::with_capacity(self.tokens.len() + self.trivia.len());
        let mut trivia = self.trivia.iter().peekable();
        for token in &self.tokens {
            while let Some(span) = trivia.next_if(|span| span.start < token.start) {
                merged.push(self.trivia_token(&line_map, span));
            }
            merged.push(*token);
        }
        merged.extend(trivia.map(|span| self.trivia_token(&line_map, span)));
        merged
    }

    fn trivia_token(&self, line_map: &LineMap, span: &TrivialSpan) -> Token<'src> {
        let position = line_map.position_of(self.source, span.start);
        Token {
            kind: span.kind.to_token_kind(),
            lexeme: span.text(self.source),
            start: span.start,
            end: span.end,
            line: position.line,
            column: position.column,
            suppressed: true,
        }
    }

    /// Concatenate every recorded span in order.
    ///
    /// Equals the source exactly when discarded trivia was kept.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for token in self.tokens_with_trivia() {
            out.push_str(token.lexeme);
        }
        out
    }

    /// Whether the recorded spans cover the source without gaps or overlaps.
    pub fn is_gap_free(&self) -> bool {
        let mut expected = 0;
        for token in self.tokens_with_trivia() {
            if token.start != expected {
                return false;
            }
            expected = token.end;
        }
        expected as usize == self.source.len()
    }
}
