//! String literal lexing.

use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string.
    ///
    /// The string runs to the next `"` or newline, whichever comes first.
    /// A closing quote is part of the token; a newline is not. Backslashes
    /// have no special meaning, so `\"` closes the string.
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        self.cursor.chop(1);
        self.cursor.chop_while(|b| b != b'"' && b != b'\n');
        if self.cursor.current_byte() == Some(b'"') {
            self.cursor.chop(1);
        }
        TokenKind::String
    }
}
