//! Identifier and keyword lexing.

use crate::token::TokenKind;

use super::Lexer;

/// Returns true if `byte` can start an identifier (`[A-Za-z_]`).
#[inline]
pub fn is_symbol_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns true if `byte` can continue an identifier (`[A-Za-z0-9_]`).
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, then classifies it against the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.chop(1);
        self.cursor.chop_while(is_symbol);

        let word = self.cursor.slice_from(self.token_start);
        if self.language().is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Symbol
        }
    }
}
