//! Token definitions.
//!
//! This module defines the closed set of token kinds produced by the lexer,
//! the ordered table of fixed-text literal tokens, and the [`Token`] view
//! returned by each scan step.

use std::borrow::Cow;
use std::fmt;

/// Category of a lexical unit.
///
/// Renderers use the kind to pick a color or style for the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of content. Carries an empty lexeme.
    End,
    /// A byte no other rule recognizes.
    Invalid,
    /// A `#`-introduced line, through its newline.
    PreprocessorDirective,
    /// An identifier that is not a keyword of the detected language.
    Symbol,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenCurly,
    /// `}`
    CloseCurly,
    /// `;`
    Semicolon,
    /// A reserved word of the detected language.
    Keyword,
    /// A `//` line comment, through its newline.
    Comment,
    /// A double-quoted string on a single line.
    String,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::End,
        TokenKind::Invalid,
        TokenKind::PreprocessorDirective,
        TokenKind::Symbol,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Semicolon,
        TokenKind::Keyword,
        TokenKind::Comment,
        TokenKind::String,
    ];

    /// Human-readable name for status lines and tooltips.
    ///
    /// # Example
    ///
    /// ```
    /// use hilex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::OpenCurly.name(), "open curly");
    /// assert_eq!(TokenKind::End.name(), "end of content");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::End => "end of content",
            TokenKind::Invalid => "invalid token",
            TokenKind::PreprocessorDirective => "preprocessor directive",
            TokenKind::Symbol => "symbol",
            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::OpenCurly => "open curly",
            TokenKind::CloseCurly => "close curly",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Keyword => "keyword",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-text tokens, scanned top to bottom; the first prefix match wins.
///
/// A literal that is a prefix of another literal must come after it, or it
/// would shadow the longer one. Literals never contain a newline.
pub const LITERAL_TOKENS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    (";", TokenKind::Semicolon),
];

/// Screen position of a token's first glyph, in rendering units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// Horizontal offset from the start of the line.
    pub x: f32,
    /// Vertical offset; zero for the first line, decreasing downwards.
    pub y: f32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One lexeme, borrowed from the buffer the lexer was created over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// Token category.
    pub kind: TokenKind,
    /// Exact source bytes of the lexeme. Empty for [`TokenKind::End`].
    pub text: &'a [u8],
    /// Screen position of the lexeme's first byte.
    pub position: Position,
    /// Byte offset of the lexeme in the source.
    pub offset: usize,
    /// Zero-based line the lexeme starts on.
    pub line: usize,
    /// Zero-based byte column of the lexeme on its line.
    pub column: usize,
}

impl<'a> Token<'a> {
    /// Returns the lexeme as text, replacing invalid UTF-8 with U+FFFD.
    pub fn text_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }

    /// Returns the number of source bytes the token spans.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for the zero-length end-of-content token.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this is the end-of-content token.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Byte range of the lexeme in the source.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text_str())
    }
}
