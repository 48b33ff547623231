//! Comment & trivia scanner.
//!
//! q comments are positional: the same `/` is a comment after a blank, an
//! operator after anything else, and a block opener when it stands alone on
//! a line. Recognition therefore depends on the byte before the offset and on
//! whether the offset is at column zero.

use crate::char_codes::*;
use crate::token::TrivialSpan;
use qlex_syntax::TriviaKind;

/// Position flags the driver passes along with the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriviaContext {
    /// The offset is the first byte of the buffer.
    pub at_start_of_file: bool,
    /// The offset is at column zero.
    pub at_start_of_line: bool,
}

impl TriviaContext {
    /// Flags for the beginning of a buffer.
    pub const START: TriviaContext = TriviaContext {
        at_start_of_file: true,
        at_start_of_line: true,
    };
}

/// A recognised trivia span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaMatch {
    pub span: TrivialSpan,
    /// A block comment that reached the end of the buffer without its closing line.
    pub unterminated: bool,
}

impl TriviaMatch {
    fn new(kind: TriviaKind, start: usize, end: usize) -> Self {
        Self {
            span: TrivialSpan::new(kind, start as u32, end as u32),
            unterminated: false,
        }
    }
}

/// Recognise whitespace or a comment starting at `offset`.
///
/// Either a complete form is returned or `None`; nothing is consumed partially.
/// `text` must be at most `MAX_SOURCE_LEN` bytes long.
pub fn scan_trivia(text: &[u8], offset: usize, ctx: TriviaContext) -> Option<TriviaMatch> {
    let &ch = text.get(offset)?;

    if ctx.at_start_of_file && offset == 0 && ch == BACKSLASH {
        let end = line_end(text, 0);
        if is_marker_line(text, 0, end, BACKSLASH) {
            return Some(TriviaMatch::new(TriviaKind::RestOfFileComment, 0, text.len()));
        }
    }

    if is_whitespace(ch) {
        let len = text[offset..]
            .iter()
            .take_while(|&&b| is_whitespace(b))
            .count();
        return Some(TriviaMatch::new(TriviaKind::Whitespace, offset, offset + len));
    }

    if ch != SLASH {
        return None;
    }

    let end = line_end(text, offset);
    if ctx.at_start_of_line {
        if is_marker_line(text, offset, end, SLASH) {
            return Some(scan_block_comment(text, offset, end));
        }
    } else if !offset
        .checked_sub(1)
        .is_some_and(|prev| is_horizontal_space(text[prev]))
    {
        return None;
    }

    let kind = if text.get(offset + 1) == Some(&SLASH) {
        TriviaKind::DocComment
    } else if ctx.at_start_of_line {
        TriviaKind::LineComment
    } else {
        TriviaKind::TrailingComment
    };
    Some(TriviaMatch::new(kind, offset, end))
}

/// Scan from an opening `/` line through the next line holding only `\`.
fn scan_block_comment(text: &[u8], start: usize, open_end: usize) -> TriviaMatch {
    let mut pos = open_end;
    loop {
        let brk = line_break_len(text, pos);
        if brk == 0 {
            break;
        }
        pos += brk;
        let end = line_end(text, pos);
        if is_marker_line(text, pos, end, BACKSLASH) {
            return TriviaMatch::new(TriviaKind::BlockComment, start, end);
        }
        pos = end;
    }
    TriviaMatch {
        span: TrivialSpan::new(TriviaKind::BlockComment, start as u32, text.len() as u32),
        unterminated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MID_LINE: TriviaContext = TriviaContext {
        at_start_of_file: false,
        at_start_of_line: false,
    };
    const LINE_START: TriviaContext = TriviaContext {
        at_start_of_file: false,
        at_start_of_line: true,
    };

    fn scan(text: &str, offset: usize, ctx: TriviaContext) -> Option<(TriviaKind, usize, usize, bool)> {
        scan_trivia(text.as_bytes(), offset, ctx).map(|m| {
            (
                m.span.kind,
                m.span.start as usize,
                m.span.end as usize,
                m.unterminated,
            )
        })
    }

    #[test]
    fn whitespace_is_greedy() {
        assert_eq!(
            scan(" \t\r\n\x0B\x0Cx", 0, MID_LINE),
            Some((TriviaKind::Whitespace, 0, 6, false))
        );
    }

    #[test]
    fn rest_of_file_only_at_offset_zero() {
        let text = "\\\nx:1\n/ not a comment here\n";
        assert_eq!(
            scan(text, 0, TriviaContext::START),
            Some((TriviaKind::RestOfFileComment, 0, text.len(), false))
        );
        assert_eq!(
            scan("\\  \t", 0, TriviaContext::START).map(|m| m.0),
            Some(TriviaKind::RestOfFileComment)
        );
        assert_eq!(scan("x\n\\\ny", 2, LINE_START), None);
    }

    #[test]
    fn system_command_is_not_rest_of_file() {
        assert_eq!(scan("\\l init.q\n", 0, TriviaContext::START), None);
    }

    #[test]
    fn block_comment() {
        let text = "/\nx:1 / inner\n\\\ny";
        assert_eq!(
            scan(text, 0, TriviaContext::START),
            Some((TriviaKind::BlockComment, 0, 15, false))
        );
    }

    #[test]
    fn block_comment_markers_allow_trailing_blanks() {
        let text = "/  \r\nbody\r\n\\ \t\r\nz";
        assert_eq!(
            scan(text, 0, LINE_START),
            Some((TriviaKind::BlockComment, 0, 14, false))
        );
    }

    #[test]
    fn block_close_must_be_at_column_zero() {
        let text = "/\n \\\nstill comment";
        assert_eq!(
            scan(text, 0, LINE_START),
            Some((TriviaKind::BlockComment, 0, text.len(), true))
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        assert_eq!(scan("/", 0, LINE_START), Some((TriviaKind::BlockComment, 0, 1, true)));
        assert_eq!(
            scan("/\nabc\n", 0, LINE_START),
            Some((TriviaKind::BlockComment, 0, 6, true))
        );
    }

    #[test]
    fn line_and_trailing_comments() {
        assert_eq!(
            scan("/ note\nx", 0, LINE_START),
            Some((TriviaKind::LineComment, 0, 6, false))
        );
        assert_eq!(
            scan("x+1 / note\r\n", 4, MID_LINE),
            Some((TriviaKind::TrailingComment, 4, 10, false))
        );
        assert_eq!(
            scan("x\t/note", 2, MID_LINE),
            Some((TriviaKind::TrailingComment, 2, 7, false))
        );
    }

    #[test]
    fn doc_comments() {
        assert_eq!(
            scan("// @param x\n", 0, LINE_START),
            Some((TriviaKind::DocComment, 0, 11, false))
        );
        assert_eq!(
            scan("f:1 // doc", 4, MID_LINE),
            Some((TriviaKind::DocComment, 4, 10, false))
        );
    }

    #[test]
    fn slash_after_non_blank_is_not_a_comment() {
        assert_eq!(scan("+/x", 1, MID_LINE), None);
        assert_eq!(scan("x/y", 1, MID_LINE), None);
        assert_eq!(scan(",//", 1, MID_LINE), None);
    }

    #[test]
    fn no_match_on_code() {
        assert_eq!(scan("abc", 0, LINE_START), None);
        assert_eq!(scan("", 0, TriviaContext::START), None);
        assert_eq!(scan("\\", 0, LINE_START), None);
    }
}
