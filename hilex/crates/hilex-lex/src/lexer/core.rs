//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the per-token dispatch.

use std::path::Path;

use hilex_util::{GlyphMetrics, FONT_SIZE};

use crate::cursor::Cursor;
use crate::language::Language;
use crate::token::{Position, Token, TokenKind};

use super::identifier::is_symbol_start;

/// Highlighting lexer over one immutable source buffer.
///
/// Each call to [`next_token`](Lexer::next_token) skips whitespace and
/// classifies exactly one lexeme. The lexer keeps no mode between calls, only
/// its position, so it can be driven until it returns [`TokenKind::End`] and
/// will keep returning `End` afterwards.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use hilex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new(b"int main() {}", Some(Path::new("main.c")), None);
/// let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
/// assert_eq!(kinds[0], TokenKind::Keyword);
/// assert_eq!(kinds[1], TokenKind::Symbol);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor with line and advance tracking.
    pub(crate) cursor: Cursor<'a>,

    /// Language selected at construction.
    language: Language,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer, detecting the language from `path`.
    ///
    /// Without a path the C-family keyword table is used. Without glyph
    /// metrics every token is reported at horizontal offset zero.
    pub fn new(
        content: &'a [u8],
        path: Option<&Path>,
        metrics: Option<&'a dyn GlyphMetrics>,
    ) -> Self {
        let language = path.map(Language::from_path).unwrap_or_default();
        Self::with_language(content, language, metrics)
    }

    /// Creates a lexer for an explicitly chosen language.
    pub fn with_language(
        content: &'a [u8],
        language: Language,
        metrics: Option<&'a dyn GlyphMetrics>,
    ) -> Self {
        match metrics {
            Some(metrics) => log::debug!(
                "lexing {} bytes as {} ({} glyphs)",
                content.len(),
                language,
                metrics.capacity()
            ),
            None => log::debug!("lexing {} bytes as {}", content.len(), language),
        }

        Self {
            cursor: Cursor::new(content, metrics),
            language,
            token_start: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// The rules are tried in a fixed order: end of content, string, `#`
    /// directive, `//` comment, literal punctuation, identifier or keyword,
    /// and finally a single invalid byte. Every token except `End` consumes
    /// at least one byte.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        // Subtracting from zero keeps the first line at +0.0.
        let position = Position::new(self.cursor.x(), 0.0 - line as f32 * FONT_SIZE);

        let kind = match self.cursor.current_byte() {
            None => TokenKind::End,
            Some(b'"') => self.lex_string(),
            Some(b'#') => self.lex_directive(),
            Some(b'/') if self.cursor.starts_with(b"//") => self.lex_line_comment(),
            Some(byte) => {
                if let Some(kind) = self.lex_literal() {
                    kind
                } else if is_symbol_start(byte) {
                    self.lex_identifier()
                } else {
                    self.lex_invalid(byte)
                }
            },
        };

        Token {
            kind,
            text: self.cursor.slice_from(self.token_start),
            position,
            offset: self.token_start,
            line,
            column,
        }
    }

    /// Lexes the whole buffer, including the trailing `End` token.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_end = token.is_end();
            tokens.push(token);
            if is_end {
                break;
            }
        }
        tokens
    }

    /// Consumes one unrecognized byte.
    fn lex_invalid(&mut self, byte: u8) -> TokenKind {
        log::trace!(
            "invalid byte {:#04x} at offset {}",
            byte,
            self.cursor.position()
        );
        self.cursor.chop(1);
        TokenKind::Invalid
    }

    /// Returns the language whose keywords are highlighted.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (0-based).
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Returns the byte offset of the start of the current line.
    pub fn bol(&self) -> usize {
        self.cursor.bol()
    }

    /// Returns the byte column on the current line (0-based).
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Returns the horizontal offset since the start of the current line.
    pub fn x(&self) -> f32 {
        self.cursor.x()
    }

    /// Returns the source buffer being lexed.
    pub fn content(&self) -> &'a [u8] {
        self.cursor.content()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
