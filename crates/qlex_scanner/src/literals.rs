//! Literal scanners consulted after the classifier.
//!
//! The driver owns comments, reserved words, system names and operators.
//! Everything else (identifiers, symbols, strings, numbers, temporal values
//! and the bracket punctuation) comes from a [`LiteralScanner`].

use crate::char_codes::*;
use crate::trie::LiteralMatch;
use qlex_syntax::TokenKind;

/// Scans one identifier or literal token.
///
/// Implementations return `None` when no token starts at `offset`. A match
/// must be non-empty, end inside `text` and end on a character boundary;
/// the driver treats anything else as no match.
pub trait LiteralScanner {
    fn scan_literal(&self, text: &str, offset: usize) -> Option<LiteralMatch>;
}

impl<T: LiteralScanner + ?Sized> LiteralScanner for &T {
    fn scan_literal(&self, text: &str, offset: usize) -> Option<LiteralMatch> {
        (**self).scan_literal(text, offset)
    }
}

/// A literal scanner that never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLiterals;

impl LiteralScanner for NoLiterals {
    fn scan_literal(&self, _text: &str, _offset: usize) -> Option<LiteralMatch> {
        None
    }
}

/// The q literal grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct QLiterals;

impl LiteralScanner for QLiterals {
    fn scan_literal(&self, text: &str, offset: usize) -> Option<LiteralMatch> {
        let bytes = text.as_bytes();
        let &ch = bytes.get(offset)?;
        let (kind, len) = match ch {
            b'(' => (TokenKind::OpenParenToken, 1),
            b')' => (TokenKind::CloseParenToken, 1),
            b'[' => (TokenKind::OpenBracketToken, 1),
            b']' => (TokenKind::CloseBracketToken, 1),
            b'{' => (TokenKind::OpenBraceToken, 1),
            b'}' => (TokenKind::CloseBraceToken, 1),
            b'\'' => (TokenKind::QuoteToken, 1),
            UNDERSCORE => (TokenKind::UnderscoreToken, 1),
            BACKTICK => (TokenKind::SymbolLiteral, scan_symbol(bytes, offset)),
            DOUBLE_QUOTE => (TokenKind::StringLiteral, scan_string(bytes, offset)),
            b'0'..=b'9' => scan_number_like(bytes, offset)?,
            DOT if bytes.get(offset + 1).is_some_and(|&b| is_digit(b)) => {
                (TokenKind::NumericLiteral, scan_numeric(bytes, offset)?)
            }
            DOT | b'a'..=b'z' | b'A'..=b'Z' => {
                (TokenKind::Identifier, scan_identifier(bytes, offset)?)
            }
            _ => return None,
        };
        Some(LiteralMatch::new(kind, len))
    }
}

/// A byte cursor with save/restore for optional sub-patterns.
struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a [u8], pos: usize) -> Self {
        Self { text, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.eat_if(&pred) {}
        self.pos - start
    }

    /// Consume exactly `n` digits, not followed by another digit.
    fn digits(&mut self, n: usize) -> bool {
        let save = self.pos;
        if self.eat_while(is_digit) == n {
            true
        } else {
            self.pos = save;
            false
        }
    }

    /// Run `f`; keep its progress only if it succeeds.
    fn attempt(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        let save = self.pos;
        if f(self) {
            true
        } else {
            self.pos = save;
            false
        }
    }
}

fn scan_symbol(text: &[u8], offset: usize) -> usize {
    1 + text[offset + 1..]
        .iter()
        .take_while(|&&b| is_symbol_part(b))
        .count()
}

/// A string may continue onto lines that start with a blank. An unterminated
/// string covers the rest of its first line.
fn scan_string(text: &[u8], offset: usize) -> usize {
    let mut pos = offset + 1;
    while let Some(&b) = text.get(pos) {
        match b {
            DOUBLE_QUOTE => return pos + 1 - offset,
            BACKSLASH if text.get(pos + 1).is_some_and(|&n| !is_line_break(n)) => pos += 2,
            b if is_line_break(b) => {
                let next = pos + line_break_len(text, pos);
                if !text.get(next).is_some_and(|&n| is_horizontal_space(n)) {
                    break;
                }
                pos = next;
            }
            _ => pos += 1,
        }
    }
    line_end(text, offset) - offset
}

fn scan_identifier(text: &[u8], offset: usize) -> Option<usize> {
    let mut c = Cursor::new(text, offset);
    c.eat(DOT);
    if !c.eat_if(is_identifier_start) {
        return None;
    }
    c.eat_while(is_identifier_part);
    while c.attempt(|c| c.eat(DOT) && c.eat_while(is_identifier_part) > 0) {}
    Some(c.pos - offset)
}

/// Longest of the temporal, byte, binary and numeric forms; ties go to the
/// earlier form.
fn scan_number_like(text: &[u8], offset: usize) -> Option<(TokenKind, usize)> {
    let candidates = [
        (TokenKind::TemporalLiteral, scan_temporal(text, offset)),
        (TokenKind::ByteLiteral, scan_byte(text, offset)),
        (TokenKind::BinaryLiteral, scan_binary(text, offset)),
        (TokenKind::NumericLiteral, scan_numeric(text, offset)),
    ];
    let mut best: Option<(TokenKind, usize)> = None;
    for (kind, len) in candidates {
        if let Some(len) = len {
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((kind, len));
            }
        }
    }
    best
}

fn scan_byte(text: &[u8], offset: usize) -> Option<usize> {
    let mut c = Cursor::new(text, offset);
    (c.eat(b'0') && c.eat(b'x') && c.eat_while(is_hex_digit) > 0).then(|| c.pos - offset)
}

fn scan_binary(text: &[u8], offset: usize) -> Option<usize> {
    let mut c = Cursor::new(text, offset);
    (c.eat_while(|b| b == b'0' || b == b'1') > 0 && c.eat(b'b')).then(|| c.pos - offset)
}

const TYPE_SUFFIXES: &[u8] = b"bhijefpmdznuvt";
const NULL_SUFFIXES: &[u8] = b"NWnw";

/// `\d+(\.\d*)?(e[+-]?\d+)?` or `\.\d+(e[+-]?\d+)?`, then an optional null
/// or infinity marker and an optional type suffix.
fn scan_numeric(text: &[u8], offset: usize) -> Option<usize> {
    let mut c = Cursor::new(text, offset);
    if c.eat(DOT) {
        if c.eat_while(is_digit) == 0 {
            return None;
        }
    } else {
        if c.eat_while(is_digit) == 0 {
            return None;
        }
        if c.eat(DOT) {
            c.eat_while(is_digit);
        }
    }
    c.attempt(|c| {
        c.eat(b'e') && {
            c.eat_if(|b| b == b'+' || b == b'-');
            c.eat_while(is_digit) > 0
        }
    });
    if c.eat_if(|b| NULL_SUFFIXES.contains(&b)) {
        c.eat_if(|b| TYPE_SUFFIXES.contains(&b));
    } else {
        c.eat_if(|b| TYPE_SUFFIXES.contains(&b));
    }
    Some(c.pos - offset)
}

/// `dd:dd`, `dd:dd:dd`, `dd:dd:dd.d+`.
fn time_of_day(c: &mut Cursor<'_>) -> bool {
    c.attempt(|c| {
        if !(c.digits(2) && c.eat(COLON) && c.digits(2)) {
            return false;
        }
        if c.attempt(|c| c.eat(COLON) && c.digits(2)) {
            c.attempt(|c| c.eat(DOT) && c.eat_while(is_digit) > 0);
        }
        true
    })
}

/// Dates, months, timestamps, datetimes, times and timespans.
fn scan_temporal(text: &[u8], offset: usize) -> Option<usize> {
    let mut c = Cursor::new(text, offset);
    if c.attempt(|c| c.digits(4) && c.eat(DOT) && c.digits(2)) {
        if c.eat(b'm') {
            return Some(c.pos - offset);
        }
        if !(c.eat(DOT) && c.digits(2)) {
            return None;
        }
        // Timestamp or datetime tail.
        c.attempt(|c| (c.eat(b'D') || c.eat(b'T')) && time_of_day(c));
        return Some(c.pos - offset);
    }

    // Timespan: `\d+D` followed by a time of day.
    if c.attempt(|c| c.eat_while(is_digit) > 0 && c.eat(b'D') && time_of_day(c)) {
        return Some(c.pos - offset);
    }
    time_of_day(&mut c).then(|| c.pos - offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(text: &str) -> Option<(TokenKind, &str)> {
        QLiterals
            .scan_literal(text, 0)
            .map(|m| (m.kind, &text[..m.len]))
    }

    #[test]
    fn identifiers() {
        assert_eq!(lit("absolute+1"), Some((TokenKind::Identifier, "absolute")));
        assert_eq!(lit("x_1 y"), Some((TokenKind::Identifier, "x_1")));
        assert_eq!(lit(".my.ns.f:1"), Some((TokenKind::Identifier, ".my.ns.f")));
        assert_eq!(lit("a.b."), Some((TokenKind::Identifier, "a.b")));
        assert_eq!(lit("._x"), None);
    }

    #[test]
    fn symbols() {
        assert_eq!(lit("`sym`b"), Some((TokenKind::SymbolLiteral, "`sym")));
        assert_eq!(lit("`:data/trade.csv "), Some((TokenKind::SymbolLiteral, "`:data/trade.csv")));
        assert_eq!(lit("`"), Some((TokenKind::SymbolLiteral, "`")));
    }

    #[test]
    fn strings() {
        assert_eq!(lit(r#""a\"b" x"#), Some((TokenKind::StringLiteral, r#""a\"b""#)));
        assert_eq!(lit("\"§\""), Some((TokenKind::StringLiteral, "\"§\"")));
        assert_eq!(lit("\"ab\n  cd\""), Some((TokenKind::StringLiteral, "\"ab\n  cd\"")));
        assert_eq!(lit("\"ab\ncd\""), Some((TokenKind::StringLiteral, "\"ab")));
        assert_eq!(lit("\"open"), Some((TokenKind::StringLiteral, "\"open")));
    }

    #[test]
    fn numbers() {
        assert_eq!(lit("42"), Some((TokenKind::NumericLiteral, "42")));
        assert_eq!(lit("3.14 "), Some((TokenKind::NumericLiteral, "3.14")));
        assert_eq!(lit("1e-3f"), Some((TokenKind::NumericLiteral, "1e-3f")));
        assert_eq!(lit("2e"), Some((TokenKind::NumericLiteral, "2e")));
        assert_eq!(lit("7j+"), Some((TokenKind::NumericLiteral, "7j")));
        assert_eq!(lit("0Nj"), Some((TokenKind::NumericLiteral, "0Nj")));
        assert_eq!(lit("0w"), Some((TokenKind::NumericLiteral, "0w")));
        assert_eq!(lit(".5"), Some((TokenKind::NumericLiteral, ".5")));
        assert_eq!(lit("1."), Some((TokenKind::NumericLiteral, "1.")));
    }

    #[test]
    fn bytes_and_binaries() {
        assert_eq!(lit("0x0aFF"), Some((TokenKind::ByteLiteral, "0x0aFF")));
        assert_eq!(lit("0x"), Some((TokenKind::NumericLiteral, "0")));
        assert_eq!(lit("101b"), Some((TokenKind::BinaryLiteral, "101b")));
        assert_eq!(lit("2b"), Some((TokenKind::NumericLiteral, "2b")));
    }

    #[test]
    fn temporals() {
        assert_eq!(lit("2024.01.31"), Some((TokenKind::TemporalLiteral, "2024.01.31")));
        assert_eq!(lit("2024.01m"), Some((TokenKind::TemporalLiteral, "2024.01m")));
        assert_eq!(
            lit("2024.01.31D12:30:00.000000001"),
            Some((TokenKind::TemporalLiteral, "2024.01.31D12:30:00.000000001"))
        );
        assert_eq!(
            lit("2024.01.31T09:30:00.000"),
            Some((TokenKind::TemporalLiteral, "2024.01.31T09:30:00.000"))
        );
        assert_eq!(lit("12:30"), Some((TokenKind::TemporalLiteral, "12:30")));
        assert_eq!(lit("12:30:15"), Some((TokenKind::TemporalLiteral, "12:30:15")));
        assert_eq!(lit("0D00:00:01"), Some((TokenKind::TemporalLiteral, "0D00:00:01")));
        assert_eq!(lit("2024.01"), Some((TokenKind::NumericLiteral, "2024.01")));
        assert_eq!(lit("123:45"), Some((TokenKind::NumericLiteral, "123")));
    }

    #[test]
    fn punctuation() {
        for (text, kind) in [
            ("(", TokenKind::OpenParenToken),
            (")", TokenKind::CloseParenToken),
            ("[", TokenKind::OpenBracketToken),
            ("]", TokenKind::CloseBracketToken),
            ("{", TokenKind::OpenBraceToken),
            ("}", TokenKind::CloseBraceToken),
            ("'", TokenKind::QuoteToken),
            ("_", TokenKind::UnderscoreToken),
        ] {
            assert_eq!(lit(text), Some((kind, text)));
            assert_eq!(kind.punctuation_text(), Some(text));
        }
    }

    #[test]
    fn no_literal() {
        assert_eq!(lit("§"), None);
        assert_eq!(lit(""), None);
        assert_eq!(QLiterals.scan_literal("ab", 5), None);
        assert_eq!(NoLiterals.scan_literal("abc", 0), None);
    }
}
