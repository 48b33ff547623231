//! JSON output records.

use qlex_diagnostics::Diagnostic;
use qlex_scanner::{ScanOutput, Token, TrivialSpan};
use serde::Serialize;

/// Everything reported for one input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord<'a> {
    pub file: String,
    pub tokens: Vec<TokenRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trivia: Option<Vec<TriviaRecord<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<TriviaRecord<'a>>>,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl<'a> FileRecord<'a> {
    pub fn new(file: &str, output: &ScanOutput<'a>, with_trivia: bool, with_docs: bool) -> Self {
        let source = output.source();
        let spans = |spans: &[TrivialSpan]| {
            spans
                .iter()
                .map(|span| TriviaRecord::new(span, source))
                .collect::<Vec<_>>()
        };
        Self {
            file: file.to_string(),
            tokens: output.tokens().iter().map(TokenRecord::from).collect(),
            trivia: with_trivia.then(|| spans(output.trivia())),
            docs: with_docs.then(|| spans(output.preserved())),
            diagnostics: output
                .diagnostics()
                .iter()
                .map(DiagnosticRecord::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord<'a> {
    pub kind: String,
    pub lexeme: &'a str,
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.to_string(),
            lexeme: token.lexeme,
            start: token.start,
            end: token.end,
            line: token.line,
            column: token.column,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaRecord<'a> {
    pub kind: String,
    pub channel: String,
    pub start: u32,
    pub end: u32,
    pub text: &'a str,
}

impl<'a> TriviaRecord<'a> {
    pub fn new(span: &TrivialSpan, source: &'a str) -> Self {
        Self {
            kind: span.kind.to_string(),
            channel: span.channel.to_string(),
            start: span.start,
            end: span.end,
            text: span.text(source),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub code: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: format!("Q{}", diagnostic.code),
            category: diagnostic.category.to_string(),
            message: diagnostic.message_text.clone(),
            start: diagnostic.span.map(|s| s.start),
            end: diagnostic.span.map(|s| s.end()),
            line: diagnostic.position.map(|p| p.line),
            column: diagnostic.position.map(|p| p.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qlex_scanner::scan;
    use serde_json::json;

    #[test]
    fn file_record_json() {
        let output = scan("x:1 // doc\n§");
        let record = FileRecord::new("a.q", &output, false, true);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "file": "a.q",
                "tokens": [
                    {"kind": "Identifier", "lexeme": "x", "start": 0, "end": 1, "line": 1, "column": 0},
                    {"kind": "ColonToken", "lexeme": ":", "start": 1, "end": 2, "line": 1, "column": 1},
                    {"kind": "NumericLiteral", "lexeme": "1", "start": 2, "end": 3, "line": 1, "column": 2},
                    {"kind": "Unknown", "lexeme": "§", "start": 11, "end": 13, "line": 2, "column": 0},
                ],
                "docs": [
                    {"kind": "DocComment", "channel": "preserved", "start": 4, "end": 10, "text": "// doc"},
                ],
                "diagnostics": [
                    {
                        "code": "Q1002",
                        "category": "error",
                        "message": "Unrecognized character '§'.",
                        "start": 11,
                        "end": 13,
                        "line": 2,
                        "column": 0,
                    },
                ],
            })
        );
    }

    #[test]
    fn trivia_included_on_request() {
        let output = scan("a b");
        let record = FileRecord::new("-", &output, true, false);
        let trivia = record.trivia.as_deref().unwrap_or_default();
        assert_eq!(trivia.len(), 1);
        assert_eq!(trivia[0].kind, "Whitespace");
        assert_eq!(trivia[0].channel, "discarded");
        assert!(record.docs.is_none());
    }
}
