//! The scan driver.
//!
//! Each step asks, in order: the trivia scanner, the keyword/operator
//! classifier, the literal scanner. When nothing matches, one character is
//! emitted as an error token and scanning continues. A rest-of-file comment
//! or the end of the buffer stops the scan.

use crate::char_codes::*;
use crate::literals::{LiteralScanner, NoLiterals, QLiterals};
use crate::output::ScanOutput;
use crate::token::{Token, TrivialSpan};
use crate::trie::{classifier, LiteralMatch};
use crate::trivia::{scan_trivia, TriviaContext, TriviaMatch};
use qlex_core::text::{Position, TextSpan};
use qlex_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use qlex_options::{LexOptions, LiteralMode};
use qlex_syntax::{Channel, TokenKind, TriviaKind};

/// Longest buffer whose byte offsets fit the `u32` offsets of tokens, spans
/// and diagnostics.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

#[inline]
fn offsets_fit(len: usize) -> bool {
    len <= MAX_SOURCE_LEN
}

/// Converts q source text into tokens.
///
/// Buffers longer than [`MAX_SOURCE_LEN`] are not scanned: the first step
/// reports `SourceTooLarge` and stops.
///
/// `Scanner` is an iterator over the primary token stream. Trivia and
/// diagnostics accumulate on the scanner as it goes; [`Scanner::scan_all`]
/// drains it and packages everything as a [`ScanOutput`].
pub struct Scanner<'src> {
    /// The source text being scanned.
    text: &'src str,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    /// 1-based line of `pos`.
    line: u32,
    /// 0-based column of `pos`, in characters.
    column: u32,
    /// Whether `pos` is at column zero.
    at_start_of_line: bool,
    done: bool,
    literals: &'src dyn LiteralScanner,
    /// Let a longer identifier win over a reserved-word prefix.
    longer_alt: bool,
    /// Record discarded trivia.
    keep_trivia: bool,
    trivia: Vec<TrivialSpan>,
    preserved: Vec<TrivialSpan>,
    token_count: usize,
    diagnostics: DiagnosticCollection,
}

impl<'src> Scanner<'src> {
    /// Create a scanner with the q literal scanner and default options.
    pub fn new(text: &'src str) -> Self {
        Self::with_literals(text, &QLiterals)
    }

    /// Create a scanner that delegates literals to `literals`.
    pub fn with_literals(text: &'src str, literals: &'src dyn LiteralScanner) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            column: 0,
            at_start_of_line: true,
            done: false,
            literals,
            longer_alt: false,
            keep_trivia: true,
            trivia: Vec::new(),
            preserved: Vec::new(),
            token_count: 0,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Create a scanner configured by `options`.
    pub fn with_options(text: &'src str, options: &LexOptions) -> Self {
        let literals: &'src dyn LiteralScanner = match options.literals {
            LiteralMode::Q => &QLiterals,
            LiteralMode::None => &NoLiterals,
        };
        Self::with_literals(text, literals)
            .longer_alt(options.identifier_longer_alt)
            .keep_trivia(options.keep_trivia)
            .max_diagnostics(options.max_diagnostics)
    }

    /// Let a literal-scanner `Identifier` that is strictly longer than the
    /// classifier's match win. Enabling this consults the literal scanner at
    /// offsets the classifier accepted.
    pub fn longer_alt(mut self, enabled: bool) -> Self {
        self.longer_alt = enabled;
        self
    }

    pub fn keep_trivia(mut self, enabled: bool) -> Self {
        self.keep_trivia = enabled;
        self
    }

    pub fn max_diagnostics(mut self, limit: Option<usize>) -> Self {
        self.diagnostics = DiagnosticCollection::with_limit(limit);
        self
    }

    /// Get the full source text.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Line and column of the next unconsumed character.
    ///
    /// `Iterator::position` shadows an inherent `position` on `&mut Scanner`
    /// receivers.
    #[inline]
    pub fn cursor_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Whether scanning has stopped.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Trivia recorded so far.
    pub fn trivia(&self) -> &[TrivialSpan] {
        &self.trivia
    }

    /// Preserved spans recorded so far.
    pub fn preserved(&self) -> &[TrivialSpan] {
        &self.preserved
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Scan the whole buffer.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.text.len()))]
    pub fn scan_all(mut self) -> ScanOutput<'src> {
        let tokens: Vec<_> = self.by_ref().collect();
        self.into_output(tokens)
    }

    /// Package `tokens` with the trivia and diagnostics gathered while
    /// producing them.
    pub fn into_output(self, tokens: Vec<Token<'src>>) -> ScanOutput<'src> {
        ScanOutput {
            source: self.text,
            tokens,
            trivia: self.trivia,
            preserved: self.preserved,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token, consuming any trivia before it.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            if self.done {
                return None;
            }
            if self.pos >= self.text.len() {
                self.finish();
                return None;
            }
            if self.pos == 0 && !offsets_fit(self.text.len()) {
                let len = self.text.len().to_string();
                self.report(Diagnostic::new(&messages::SOURCE_TOO_LARGE_0, &[len.as_str()]));
                self.finish();
                return None;
            }

            let ctx = TriviaContext {
                at_start_of_file: self.pos == 0,
                at_start_of_line: self.at_start_of_line,
            };
            if let Some(found) = scan_trivia(self.text.as_bytes(), self.pos, ctx) {
                self.consume_trivia(found);
                continue;
            }

            let found = self.match_token();
            let token = Token {
                kind: found.kind,
                lexeme: &self.text[self.pos..self.pos + found.len],
                start: self.pos as u32,
                end: (self.pos + found.len) as u32,
                line: self.line,
                column: self.column,
                suppressed: false,
            };
            self.advance_to(self.pos + found.len);
            self.token_count += 1;
            return Some(token);
        }
    }

    /// Classifier first, then the literal scanner, then a one-character
    /// error token.
    fn match_token(&mut self) -> LiteralMatch {
        if let Some(found) = classifier().classify(self.text.as_bytes(), self.pos) {
            if self.longer_alt {
                if let Some(alt) = self
                    .scan_literal()
                    .filter(|alt| alt.kind == TokenKind::Identifier && alt.len > found.len)
                {
                    return alt;
                }
            }
            return found;
        }
        if let Some(found) = self.scan_literal() {
            return found;
        }

        let ch = self.text[self.pos..].chars().next().unwrap_or('\u{FFFD}');
        let len = ch.len_utf8();
        let ch = ch.to_string();
        self.report(Diagnostic::at(
            TextSpan::new(self.pos as u32, len as u32),
            self.cursor_position(),
            &messages::UNRECOGNIZED_CHARACTER_0,
            &[ch.as_str()],
        ));
        LiteralMatch::new(TokenKind::Unknown, len)
    }

    /// Ask the literal scanner, discarding matches that break its contract.
    fn scan_literal(&self) -> Option<LiteralMatch> {
        self.literals
            .scan_literal(self.text, self.pos)
            .filter(|found| {
                let end = self.pos + found.len;
                found.len > 0 && end <= self.text.len() && self.text.is_char_boundary(end)
            })
    }

    fn consume_trivia(&mut self, found: TriviaMatch) {
        let span = found.span;
        if found.unterminated {
            self.report(Diagnostic::at(
                span.span(),
                self.cursor_position(),
                &messages::UNTERMINATED_BLOCK_COMMENT,
                &[],
            ));
        }
        if span.channel == Channel::Preserved {
            self.preserved.push(span);
        }
        if self.keep_trivia || span.channel == Channel::Preserved {
            self.trivia.push(span);
        }
        self.advance_to(span.end as usize);
        if span.kind == TriviaKind::RestOfFileComment {
            self.finish();
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(
            code = diagnostic.code,
            offset = ?diagnostic.offset(),
            "{}",
            diagnostic.message_text
        );
        self.diagnostics.add(diagnostic);
    }

    /// Move `pos` to `end`, updating line, column and the start-of-line flag.
    fn advance_to(&mut self, end: usize) {
        let bytes = self.text.as_bytes();
        let mut line_start = None;
        for i in memchr::memchr2_iter(LINE_FEED, CARRIAGE_RETURN, &bytes[self.pos..end]) {
            let at = self.pos + i;
            if bytes[at] == CARRIAGE_RETURN && bytes.get(at + 1) == Some(&LINE_FEED) {
                continue;
            }
            self.line += 1;
            line_start = Some(at + 1);
        }
        match line_start {
            Some(start) => self.column = self.text[start..end].chars().count() as u32,
            None => self.column += self.text[self.pos..end].chars().count() as u32,
        }
        self.at_start_of_line = end > self.pos && is_line_break(bytes[end - 1]);
        self.pos = end;
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            tracing::trace!(
                tokens = self.token_count,
                trivia = self.trivia.len(),
                diagnostics = self.diagnostics.len(),
                "scan done"
            );
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan `text` with the q literal scanner and default options.
pub fn scan(text: &str) -> ScanOutput<'_> {
    Scanner::new(text).scan_all()
}

/// Scan `text` as configured by `options`.
pub fn scan_with_options<'src>(text: &'src str, options: &LexOptions) -> ScanOutput<'src> {
    Scanner::with_options(text, options).scan_all()
}
