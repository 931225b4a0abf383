//! Byte cursor over a sentinel-terminated buffer, with line/column tracking.
//!
//! The cursor advances through the buffer byte by byte. EOF is detected by
//! position (`pos >= source_len`), not by the byte value, so interior null
//! bytes are ordinary content. Reads at EOF return the sentinel `0x00`.
//!
//! # Positions
//!
//! Lines and columns are 1-based. Consuming `\n` moves to the next line and
//! resets the column to 1; consuming anything else adds the number of bytes
//! consumed to the column. Columns therefore count bytes, not display width.
//!
//! # Character boundaries
//!
//! [`advance`](Cursor::advance) and [`eat_while`](Cursor::eat_while) move by
//! single bytes and must only be used on ASCII input. Non-ASCII characters
//! are consumed whole with [`advance_char`](Cursor::advance_char), which keeps
//! `pos` on a UTF-8 boundary so [`slice`](Cursor::slice) never splits one.

/// A snapshot of the cursor's location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in bytes.
    pub column: u32,
}

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`]; the scanner owns one and nothing else observes it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source text followed by sentinel bytes.
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinels).
    source_len: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf` must hold at least two `0x00` bytes starting at `source_len`.
    /// This is guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinels must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Returns the byte one position ahead of current, `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize + 1]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Consume one ASCII byte.
    ///
    /// Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Consume one full UTF-8 character and return it.
    ///
    /// The column advances by the character's byte width. Returns `None`
    /// at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance_char(&mut self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let c = self.buf[self.pos as usize..].chars().next()?;
        let width = c.len_utf8() as u32;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += width;
        }
        self.pos += width;
        Some(c)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` must reject `0x00` (so the sentinel stops the loop), `\n`
    /// (lines are not tracked here), and every non-ASCII byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.column += self.pos - start;
    }

    /// Skip whitespace between tokens.
    ///
    /// Space, tab, carriage return, vertical tab, and form feed advance the
    /// column; `\n` starts a new line.
    pub fn eat_whitespace(&mut self) {
        while !self.is_eof() {
            match self.current() {
                b'\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.column += 1,
                _ => break,
            }
            self.pos += 1;
        }
    }

    /// Advance past ordinary literal content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes inside a literal opened by `quote` are the quote
    /// itself, `\`, and `\n`. None of the skipped bytes is a newline, so the
    /// column advances by the number of bytes skipped.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf.as_bytes()[self.pos as usize..self.source_len as usize];
        let skipped = match memchr::memchr3(quote, b'\\', b'\n', remaining) {
            Some(offset) => offset as u32,
            None => remaining.len() as u32,
        };
        self.pos += skipped;
        self.column += skipped;
        if self.is_eof() {
            0
        } else {
            self.current()
        }
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on UTF-8
    /// character boundaries. Offsets taken from this cursor satisfy both.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
