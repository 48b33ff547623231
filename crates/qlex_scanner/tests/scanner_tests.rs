//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes q constructs.

use pretty_assertions::assert_eq;
use qlex_core::text::{Position, TextSpan};
use qlex_diagnostics::DiagnosticKind;
use qlex_scanner::{scan, LiteralMatch, LiteralScanner, QLiterals, Scanner};
use std::cell::RefCell;
use qlex_syntax::{Channel, TokenKind, TriviaKind, LITERALS};

/// Helper: scan all tokens from source and return as (kind, lexeme) pairs.
fn scan_all(source: &str) -> Vec<(TokenKind, &str)> {
    Scanner::new(source).map(|t| (t.kind, t.lexeme)).collect()
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    let output = scan("");
    assert!(output.tokens().is_empty());
    assert!(output.trivia().is_empty());
    assert!(output.diagnostics().is_empty());
}

#[test]
fn test_whitespace_only() {
    let output = scan("   \n\t  ");
    assert!(output.tokens().is_empty());
    assert_eq!(output.trivia().len(), 1);
    assert_eq!(output.trivia()[0].kind, TriviaKind::Whitespace);
}

#[test]
fn test_every_fixed_spelling_scans_alone() {
    for &(spelling, kind) in LITERALS {
        // At the start of a buffer these open comments.
        if spelling.starts_with('/') || spelling == "\\" {
            continue;
        }
        assert_eq!(scan_all(spelling), vec![(kind, spelling)], "{spelling}");
    }
}

#[test]
fn test_slash_and_backslash_as_operators() {
    assert_eq!(
        scan_kinds("x/y\\z"),
        vec![
            TokenKind::Identifier,
            TokenKind::SlashToken,
            TokenKind::Identifier,
            TokenKind::BackslashToken,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_prefix_families() {
    assert_eq!(
        scan_kinds("< <= <> <>="),
        vec![
            TokenKind::LessThanToken,
            TokenKind::LessThanEqualsToken,
            TokenKind::LessThanGreaterThanToken,
            TokenKind::LessThanGreaterThanEqualsToken,
        ]
    );
    assert_eq!(
        scan_kinds("uj ujf wj wj1 aj aj0 ajf ajf0"),
        vec![
            TokenKind::UjKeyword,
            TokenKind::UjfKeyword,
            TokenKind::WjKeyword,
            TokenKind::Wj1Keyword,
            TokenKind::AjKeyword,
            TokenKind::Aj0Keyword,
            TokenKind::AjfKeyword,
            TokenKind::Ajf0Keyword,
        ]
    );
}

#[test]
fn test_compound_assignments() {
    assert_eq!(
        scan_all("x+:1;y exp=2;z sqrt=3"),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::PlusToken, "+"),
            (TokenKind::ColonToken, ":"),
            (TokenKind::NumericLiteral, "1"),
            (TokenKind::SemicolonToken, ";"),
            (TokenKind::Identifier, "y"),
            (TokenKind::ExpEqualsToken, "exp="),
            (TokenKind::NumericLiteral, "2"),
            (TokenKind::SemicolonToken, ";"),
            (TokenKind::Identifier, "z"),
            (TokenKind::SqrtEqualsToken, "sqrt="),
            (TokenKind::NumericLiteral, "3"),
        ]
    );
}

#[test]
fn test_system_names() {
    assert_eq!(
        scan_all(".z.ts:{x}; .Q.A .Q.a"),
        vec![
            (TokenKind::DotZTs, ".z.ts"),
            (TokenKind::ColonToken, ":"),
            (TokenKind::OpenBraceToken, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::CloseBraceToken, "}"),
            (TokenKind::SemicolonToken, ";"),
            (TokenKind::DotQAUpper, ".Q.A"),
            (TokenKind::DotQA, ".Q.a"),
        ]
    );
}

#[test]
fn test_q_sql() {
    assert_eq!(
        scan_all("select max p by s from t where p>0"),
        vec![
            (TokenKind::SelectKeyword, "select"),
            (TokenKind::MaxKeyword, "max"),
            (TokenKind::Identifier, "p"),
            (TokenKind::Identifier, "by"),
            (TokenKind::Identifier, "s"),
            (TokenKind::Identifier, "from"),
            (TokenKind::Identifier, "t"),
            (TokenKind::WhereKeyword, "where"),
            (TokenKind::Identifier, "p"),
            (TokenKind::GreaterThanToken, ">"),
            (TokenKind::NumericLiteral, "0"),
        ]
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        scan_all("`a`b.c 0x0f 101b 2024.01.31 12:00 \"s\""),
        vec![
            (TokenKind::SymbolLiteral, "`a"),
            (TokenKind::SymbolLiteral, "`b.c"),
            (TokenKind::ByteLiteral, "0x0f"),
            (TokenKind::BinaryLiteral, "101b"),
            (TokenKind::TemporalLiteral, "2024.01.31"),
            (TokenKind::TemporalLiteral, "12:00"),
            (TokenKind::StringLiteral, "\"s\""),
        ]
    );
}

#[test]
fn test_function_with_comments() {
    let source = "// add two numbers\nadd:{[a;b] a+b} / trailing\n/ whole line\nadd[1;2]\n";
    let output = scan(source);
    let lexemes: Vec<_> = output.tokens().iter().map(|t| t.lexeme).collect();
    assert_eq!(
        lexemes,
        vec![
            "add", ":", "{", "[", "a", ";", "b", "]", "a", "+", "b", "}", "add", "[", "1", ";",
            "2", "]",
        ]
    );
    let comments: Vec<_> = output
        .trivia()
        .iter()
        .filter(|t| t.kind.is_comment())
        .map(|t| (t.kind, t.text(source)))
        .collect();
    assert_eq!(
        comments,
        vec![
            (TriviaKind::DocComment, "// add two numbers"),
            (TriviaKind::TrailingComment, "/ trailing"),
            (TriviaKind::LineComment, "/ whole line"),
        ]
    );
    assert_eq!(output.preserved().len(), 1);
    assert_eq!(output.preserved()[0].channel, Channel::Preserved);
    assert_eq!(output.reconstruct(), source);
}

#[test]
fn test_block_comment_with_code_like_contents() {
    let source = "a:1\n/\nb:2 / not a token\n\\\\ neither\n// nor a doc\n\\\nc:3";
    let output = scan(source);
    let lexemes: Vec<_> = output.tokens().iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec!["a", ":", "1", "c", ":", "3"]);
    assert!(output.preserved().is_empty());
    let c = output.tokens()[3];
    assert_eq!((c.line, c.column), (7, 0));
}

#[test]
fn test_rest_of_file_swallows_everything() {
    let source = "\\\n§ not scanned\n/\nunterminated";
    let output = scan(source);
    assert!(output.tokens().is_empty());
    assert!(output.diagnostics().is_empty());
    assert_eq!(output.trivia().len(), 1);
    assert_eq!(output.trivia()[0].kind, TriviaKind::RestOfFileComment);
    assert_eq!(output.reconstruct(), source);
}

#[test]
fn test_system_command_is_not_rest_of_file() {
    assert_eq!(
        scan_kinds("\\l db.q"),
        vec![TokenKind::BackslashToken, TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn test_stray_character_recovery() {
    let output = scan("a:1;\u{7}b:2");
    let diagnostics = output.diagnostics().diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), Some(DiagnosticKind::UnrecognizedCharacter));
    let errors: Vec<_> = output.tokens().iter().filter(|t| t.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].len(), 1);
    assert_eq!(output.tokens().last().map(|t| t.lexeme), Some("2"));
}

#[test]
fn test_unterminated_block_comment_reports_and_recovers() {
    let output = scan("x:1\n/\ny:2\n");
    assert_eq!(output.tokens().len(), 3);
    let diagnostics = output.diagnostics().diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), Some(DiagnosticKind::UnterminatedComment));
    assert!(output.has_errors());
}

#[test]
fn test_diagnostic_positions_while_iterating() {
    let mut scanner = Scanner::new("xy\n  \u{7}\n/\nz");
    assert_eq!(scanner.next().map(|t| t.lexeme), Some("xy"));
    assert_eq!(scanner.cursor_position(), Position::new(1, 2));

    let rest: Vec<_> = scanner.by_ref().map(|t| t.kind).collect();
    assert_eq!(rest, vec![TokenKind::Unknown]);
    let located: Vec<_> = scanner
        .diagnostics()
        .iter()
        .map(|d| (d.code, d.span, d.position))
        .collect();
    assert_eq!(
        located,
        vec![
            (1002, Some(TextSpan::new(5, 1)), Some(Position::new(2, 2))),
            (1001, Some(TextSpan::new(7, 3)), Some(Position::new(3, 0))),
        ]
    );
}

#[test]
fn test_doc_comment_markers() {
    for source in ["// note\nx", "//! note\nx", "x //! note"] {
        let output = scan(source);
        let docs: Vec<_> = output.preserved().iter().map(|s| s.kind).collect();
        assert_eq!(docs, vec![TriviaKind::DocComment], "{:?}", source);
        assert_eq!(output.preserved()[0].channel, Channel::Preserved);
        assert_eq!(scan_kinds(source), vec![TokenKind::Identifier], "{:?}", source);
    }
}

/// Records every offset the driver asks about.
#[derive(Default)]
struct RecordingLiterals {
    offsets: RefCell<Vec<usize>>,
}

impl LiteralScanner for RecordingLiterals {
    fn scan_literal(&self, text: &str, offset: usize) -> Option<LiteralMatch> {
        self.offsets.borrow_mut().push(offset);
        QLiterals.scan_literal(text, offset)
    }
}

#[test]
fn test_literal_scanner_skips_classified_offsets() {
    let literals = RecordingLiterals::default();
    let kinds: Vec<_> = Scanner::with_literals("abs x+1", &literals)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::AbsKeyword,
            TokenKind::Identifier,
            TokenKind::PlusToken,
            TokenKind::NumericLiteral,
        ]
    );
    assert_eq!(*literals.offsets.borrow(), vec![4, 6]);
}

#[test]
fn test_longer_alt_consults_literal_scanner_on_classified_offsets() {
    let literals = RecordingLiterals::default();
    let tokens: Vec<_> = Scanner::with_literals("absolute+1", &literals)
        .longer_alt(true)
        .map(|t| (t.kind, t.lexeme))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "absolute"),
            (TokenKind::PlusToken, "+"),
            (TokenKind::NumericLiteral, "1"),
        ]
    );
    assert_eq!(*literals.offsets.borrow(), vec![0, 8, 9]);
}
