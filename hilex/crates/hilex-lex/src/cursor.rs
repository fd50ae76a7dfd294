//! Byte cursor with line and glyph-advance tracking.
//!
//! This module provides the `Cursor` struct which owns the scan position
//! over a source buffer. Every byte the lexer consumes goes through
//! [`Cursor::chop`], which keeps the line counter, the start-of-line offset
//! and the horizontal rendering offset in step with the position.

use hilex_util::GlyphMetrics;

/// A cursor over an immutable byte buffer.
///
/// The byte position is the single source of truth. The line number, the
/// start-of-line offset and the horizontal offset `x` are derived from the
/// bytes consumed so far and have no setters.
///
/// # Example
///
/// ```
/// use hilex_lex::cursor::Cursor;
/// use hilex_util::GlyphAtlas;
///
/// let atlas = GlyphAtlas::monospace(8.0);
/// let mut cursor = Cursor::new(b"ab\ncd", Some(&atlas));
///
/// cursor.chop(2);
/// assert_eq!(cursor.x(), 16.0);
/// cursor.chop(1);
/// assert_eq!(cursor.line(), 1);
/// assert_eq!(cursor.x(), 0.0);
/// ```
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    content: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (0-based).
    line: usize,

    /// Byte offset where the current line starts.
    bol: usize,

    /// Horizontal offset since the start of the line, in rendering units.
    x: f32,

    /// Advance-width provider; without one `x` stays at zero.
    metrics: Option<&'a dyn GlyphMetrics>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `content`.
    pub fn new(content: &'a [u8], metrics: Option<&'a dyn GlyphMetrics>) -> Self {
        Self {
            content,
            position: 0,
            line: 0,
            bol: 0,
            x: 0.0,
            metrics,
        }
    }

    /// Consumes `len` bytes, updating line and horizontal tracking.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `len` bytes remain. Consuming past the end of
    /// the content is a bug in the caller, not a recoverable condition.
    pub fn chop(&mut self, len: usize) {
        assert!(
            len <= self.content.len() - self.position,
            "cannot consume {} byte(s) at offset {}: content is {} bytes long",
            len,
            self.position,
            self.content.len()
        );

        for _ in 0..len {
            let byte = self.content[self.position];
            self.position += 1;
            if byte == b'\n' {
                self.line += 1;
                self.bol = self.position;
                self.x = 0.0;
            } else if let Some(metrics) = self.metrics {
                self.x += metrics.advance_for_byte(byte);
            }
        }
    }

    /// Consumes bytes while `pred` holds and the end is not reached.
    ///
    /// Returns the number of bytes consumed.
    pub fn chop_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.position;
        while let Some(byte) = self.current_byte() {
            if !pred(byte) {
                break;
            }
            self.chop(1);
        }
        self.position - start
    }

    /// Consumes the rest of the current line, including its newline if any.
    pub fn chop_line(&mut self) {
        self.chop_while(|b| b != b'\n');
        if !self.is_at_end() {
            self.chop(1);
        }
    }

    /// Skips ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`).
    pub fn skip_whitespace(&mut self) {
        self.chop_while(is_space);
    }

    /// Returns the byte at the cursor, or `None` at the end.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.content.get(self.position).copied()
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.content.get(self.position + offset).copied()
    }

    /// Returns true if the unconsumed input begins with `prefix`.
    ///
    /// An empty prefix always matches.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Returns true if the cursor is at the end of the content.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.content.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (0-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte offset of the start of the current line.
    pub fn bol(&self) -> usize {
        self.bol
    }

    /// Returns the byte column on the current line (0-based).
    pub fn column(&self) -> usize {
        self.position - self.bol
    }

    /// Returns the horizontal offset since the start of the line.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns true if an advance-width provider is attached.
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Returns the bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.content[start..self.position]
    }

    /// Returns the unconsumed bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.content[self.position..]
    }

    /// Returns the whole source buffer.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }
}

/// C `isspace` over the ASCII range.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilex_util::GlyphAtlas;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new(b"int x;", None);
        assert_eq!(cursor.current_byte(), Some(b'i'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 0);
        assert_eq!(cursor.bol(), 0);
        assert_eq!(cursor.x(), 0.0);
        assert!(!cursor.has_metrics());
    }

    #[test]
    fn test_chop_advances_position() {
        let mut cursor = Cursor::new(b"abc", None);
        cursor.chop(2);
        assert_eq!(cursor.current_byte(), Some(b'c'));
        cursor.chop(1);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_byte(), None);
    }

    #[test]
    fn test_chop_zero_at_end_is_allowed() {
        let mut cursor = Cursor::new(b"", None);
        cursor.chop(0);
        assert!(cursor.is_at_end());
    }

    #[test]
    #[should_panic(expected = "cannot consume")]
    fn test_chop_past_end_panics() {
        let mut cursor = Cursor::new(b"ab", None);
        cursor.chop(3);
    }

    #[test]
    fn test_newline_tracking() {
        let mut cursor = Cursor::new(b"ab\ncd\n\nx", None);
        cursor.chop(3);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.bol(), 3);
        cursor.chop(1);
        assert_eq!(cursor.column(), 1);
        cursor.chop(3);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.bol(), 7);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_x_without_metrics_stays_zero() {
        let mut cursor = Cursor::new(b"hello world", None);
        cursor.chop(11);
        assert_eq!(cursor.x(), 0.0);
    }

    #[test]
    fn test_x_accumulates_advances() {
        let mut advances = vec![10.0; 128];
        advances[b'i' as usize] = 4.0;
        let atlas = GlyphAtlas::from_advances(advances).unwrap();
        let mut cursor = Cursor::new(b"iw", Some(&atlas));
        cursor.chop(1);
        assert_eq!(cursor.x(), 4.0);
        cursor.chop(1);
        assert_eq!(cursor.x(), 14.0);
    }

    #[test]
    fn test_x_resets_on_newline() {
        let atlas = GlyphAtlas::monospace(5.0);
        let mut cursor = Cursor::new(b"abc\nd", Some(&atlas));
        cursor.chop(3);
        assert_eq!(cursor.x(), 15.0);
        cursor.chop(1);
        assert_eq!(cursor.x(), 0.0);
        cursor.chop(1);
        assert_eq!(cursor.x(), 5.0);
    }

    #[test]
    fn test_non_ascii_bytes_use_fallback_advance() {
        let mut advances = vec![1.0; 128];
        advances[b'?' as usize] = 7.0;
        let atlas = GlyphAtlas::from_advances(advances).unwrap();
        let source = "é".as_bytes();
        let mut cursor = Cursor::new(source, Some(&atlas));
        cursor.chop(source.len());
        assert_eq!(cursor.x(), 14.0);
    }

    #[test]
    fn test_chop_while_and_line() {
        let mut cursor = Cursor::new(b"abc123 // rest\nnext", None);
        assert_eq!(cursor.chop_while(|b| b.is_ascii_alphabetic()), 3);
        assert_eq!(cursor.current_byte(), Some(b'1'));
        cursor.chop_line();
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.remaining(), b"next");
    }

    #[test]
    fn test_chop_line_without_trailing_newline() {
        let mut cursor = Cursor::new(b"# define", None);
        cursor.chop_line();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), 0);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(b" \t\r\x0B\x0C\n  int", None);
        cursor.skip_whitespace();
        assert_eq!(cursor.current_byte(), Some(b'i'));
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_starts_with() {
        let mut cursor = Cursor::new(b"//x", None);
        assert!(cursor.starts_with(b"//"));
        assert!(cursor.starts_with(b""));
        cursor.chop(2);
        assert!(!cursor.starts_with(b"//"));
        assert!(cursor.starts_with(b"x"));
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new(b"int x", None);
        cursor.chop(3);
        assert_eq!(cursor.slice_from(0), b"int");
        assert_eq!(cursor.remaining(), b" x");
        assert_eq!(cursor.content(), b"int x");
    }

    #[test]
    fn test_peek_byte() {
        let cursor = Cursor::new(b"ab", None);
        assert_eq!(cursor.peek_byte(1), Some(b'b'));
        assert_eq!(cursor.peek_byte(2), None);
    }

    #[test]
    fn test_is_space_matches_c_locale() {
        for byte in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(byte));
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
        assert!(!is_space(0xA0));
    }
}
