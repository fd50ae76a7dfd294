//! Line-oriented lexing: `#` directives and `//` comments.
//!
//! Both rules run for every language, so a Python `#` comment is reported
//! as a preprocessor directive.

use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `#` line through its newline.
    pub(crate) fn lex_directive(&mut self) -> TokenKind {
        self.cursor.chop_line();
        TokenKind::PreprocessorDirective
    }

    /// Lexes a `//` comment through its newline.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.chop_line();
        TokenKind::Comment
    }
}
