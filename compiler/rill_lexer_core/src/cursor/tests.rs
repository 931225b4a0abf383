use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

#[test]
fn starts_at_line_one_column_one() {
    let buf = SourceBuffer::new("<input>", "abc");
    let cursor = buf.cursor();
    assert_eq!(
        cursor.position(),
        Position {
            offset: 0,
            line: 1,
            column: 1
        }
    );
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn sentinel_reads_at_end() {
    let buf = SourceBuffer::new("<input>", "a");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn advance_at_eof_is_a_no_op() {
    let buf = SourceBuffer::new("<input>", "");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.column(), 1);
    assert_eq!(cursor.advance_char(), None);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("<input>", "\0x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn newline_bumps_line_and_resets_column() {
    let buf = SourceBuffer::new("<input>", "ab\ncd");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (1, 3));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 2));
}

#[test]
fn advance_char_counts_bytes() {
    let buf = SourceBuffer::new("<input>", "é!");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.advance_char(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.column(), 3);
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn eat_while_advances_column() {
    let buf = SourceBuffer::new("<input>", "abc12 rest");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.slice_from(0), "abc12");
    assert_eq!(cursor.column(), 6);
}

#[test]
fn eat_while_stops_at_eof() {
    let buf = SourceBuffer::new("<input>", "aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_tracks_lines() {
    let buf = SourceBuffer::new("<input>", " \t\r\n  \x0b\x0cx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!((cursor.line(), cursor.column()), (2, 5));
}

#[test]
fn eat_whitespace_to_eof() {
    let buf = SourceBuffer::new("<input>", "x \n ");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
    assert_eq!((cursor.line(), cursor.column()), (2, 2));
}

#[test]
fn skip_to_literal_delim_finds_quote() {
    let buf = SourceBuffer::new("<input>", "hello\" tail");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.column(), 6);
}

#[test]
fn skip_to_literal_delim_stops_at_backslash_and_newline() {
    let buf = SourceBuffer::new("<input>", "ab\\n\ncd");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'\''), b'\\');
    assert_eq!(cursor.pos(), 2);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.skip_to_literal_delim(b'\''), b'\n');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn skip_to_literal_delim_ignores_other_quote() {
    let buf = SourceBuffer::new("<input>", "it's\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'"'), b'"');
    assert_eq!(cursor.slice_from(0), "it's");
}

#[test]
fn skip_to_literal_delim_hits_eof() {
    let buf = SourceBuffer::new("<input>", "unterminated");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_literal_delim(b'"'), 0);
    assert!(cursor.is_eof());
    assert_eq!(cursor.column(), 13);
}

#[test]
fn slice_between_offsets() {
    let buf = SourceBuffer::new("<input>", "var x;");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 3), "var");
    assert_eq!(cursor.slice(4, 5), "x");
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "proptest inputs are far below u32::MAX"
)]
mod proptest_positions {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    /// Reference line/column after consuming `text`, counting bytes.
    fn naive_position(text: &str) -> (u32, u32) {
        let mut line = 1;
        let mut column = 1;
        for b in text.bytes() {
            if b == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    proptest! {
        #[test]
        fn advance_char_matches_naive_count(text in "[a-z \\n\\té€]{0,64}") {
            let buf = SourceBuffer::new("<input>", &text);
            let mut cursor = buf.cursor();
            while cursor.advance_char().is_some() {}
            prop_assert_eq!(cursor.pos() as usize, text.len());
            prop_assert_eq!((cursor.line(), cursor.column()), naive_position(&text));
        }

        #[test]
        fn eat_whitespace_matches_naive_count(
            ws in "[ \\t\\r\\n]{0,32}",
            rest in "[a-z]{1,8}",
        ) {
            let text = format!("{ws}{rest}");
            let buf = SourceBuffer::new("<input>", &text);
            let mut cursor = buf.cursor();
            cursor.eat_whitespace();
            prop_assert_eq!(cursor.pos() as usize, ws.len());
            prop_assert_eq!((cursor.line(), cursor.column()), naive_position(&ws));
        }
    }
}
