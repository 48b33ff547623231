//! Byte constants and classes used by the scanner.
//!
//! q source is scanned byte-wise; everything the scanner dispatches on is ASCII.

#![allow(dead_code)]

pub const TAB: u8 = b'\t';
pub const LINE_FEED: u8 = b'\n';
pub const VERTICAL_TAB: u8 = 0x0B;
pub const FORM_FEED: u8 = 0x0C;
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const SPACE: u8 = b' ';

pub const DOUBLE_QUOTE: u8 = b'"';
pub const DOT: u8 = b'.';
pub const SLASH: u8 = b'/';
pub const COLON: u8 = b':';
pub const BACKSLASH: u8 = b'\\';
pub const UNDERSCORE: u8 = b'_';
pub const BACKTICK: u8 = b'`';

/// Check if a byte is a line terminator.
#[inline]
pub fn is_line_break(ch: u8) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Space or tab: the only bytes that may precede a trailing comment.
#[inline]
pub fn is_horizontal_space(ch: u8) -> bool {
    ch == SPACE || ch == TAB
}

/// Check if a byte is whitespace trivia.
#[inline]
pub fn is_whitespace(ch: u8) -> bool {
    matches!(
        ch,
        SPACE | TAB | LINE_FEED | CARRIAGE_RETURN | VERTICAL_TAB | FORM_FEED
    )
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(ch: u8) -> bool {
    ch.is_ascii_hexdigit()
}

#[inline]
pub fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
pub fn is_identifier_part(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == UNDERSCORE
}

/// Bytes allowed in a symbol literal after the backtick.
#[inline]
pub fn is_symbol_part(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, UNDERSCORE | DOT | COLON | SLASH)
}

/// Offset of the end of the line containing `offset` (the terminator itself
/// is not included).
#[inline]
pub fn line_end(text: &[u8], offset: usize) -> usize {
    memchr::memchr2(LINE_FEED, CARRIAGE_RETURN, &text[offset..]).map_or(text.len(), |i| offset + i)
}

/// Length of the line terminator at `offset`: 2 for CR LF, 1 for a lone CR
/// or LF, 0 otherwise.
#[inline]
pub fn line_break_len(text: &[u8], offset: usize) -> usize {
    match text.get(offset) {
        Some(&CARRIAGE_RETURN) if text.get(offset + 1) == Some(&LINE_FEED) => 2,
        Some(&ch) if is_line_break(ch) => 1,
        _ => 0,
    }
}

/// Whether `text[start..end]` is `marker` followed only by spaces and tabs.
#[inline]
pub fn is_marker_line(text: &[u8], start: usize, end: usize, marker: u8) -> bool {
    start < end
        && text[start] == marker
        && text[start + 1..end].iter().all(|&b| is_horizontal_space(b))
}
