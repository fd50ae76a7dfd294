//! Fixed-text punctuation lexing.

use crate::token::{TokenKind, LITERAL_TOKENS};

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the first entry of [`LITERAL_TOKENS`] that prefixes the input.
    ///
    /// Returns `None`, consuming nothing, when no literal matches.
    pub(crate) fn lex_literal(&mut self) -> Option<TokenKind> {
        let (text, kind) = LITERAL_TOKENS
            .iter()
            .find(|(text, _)| self.cursor.starts_with(text.as_bytes()))?;
        self.cursor.chop(text.len());
        Some(*kind)
    }
}
