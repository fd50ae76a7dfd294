//! hilex-lex - Highlighting Lexer for Editor Front Ends
//!
//! This crate provides a single-pass tokenizer that turns a source buffer
//! into classified tokens for syntax highlighting. Alongside each token's
//! kind and exact source bytes it reports where the token sits on screen,
//! using per-glyph advance widths from an optional metrics provider.
//!
//! # Overview
//!
//! The lexer is deliberately shallow: it knows strings, `#` directives,
//! `//` comments, a handful of punctuation tokens, identifiers and the
//! keywords of the language detected from the file extension. Anything else
//! is reported byte by byte as [`TokenKind::Invalid`], so a highlighter can
//! always draw the whole buffer.
//!
//! # Example Usage
//!
//! ```
//! use std::path::Path;
//! use hilex_lex::{Language, Lexer, TokenKind};
//! use hilex_util::GlyphAtlas;
//!
//! let source = b"def main():\n    pass";
//! let atlas = GlyphAtlas::monospace(10.0);
//! let lexer = Lexer::new(source, Some(Path::new("main.py")), Some(&atlas));
//! assert_eq!(lexer.language(), Language::Python);
//!
//! let tokens = lexer.tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].text, b"main");
//! assert_eq!(tokens[1].position.x, 40.0);
//! assert!(tokens.last().unwrap().is_end());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, display names and the literal table
//! - [`language`] - Language detection and keyword tables
//! - [`cursor`] - Byte cursor with line and advance tracking
//! - [`lexer`] - Main lexer implementation
//!
//! # Token Categories
//!
//! | Kind | Lexeme |
//! |------|--------|
//! | `String` | `"` up to the next `"` or newline |
//! | `PreprocessorDirective` | `#` through the end of the line |
//! | `Comment` | `//` through the end of the line |
//! | `OpenParen` ... `Semicolon` | `(` `)` `{` `}` `;` |
//! | `Keyword` / `Symbol` | `[A-Za-z_][A-Za-z0-9_]*` |
//! | `Invalid` | any other single byte |
//! | `End` | empty, at end of content |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod language;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{is_space, Cursor};
pub use language::Language;
pub use lexer::{is_symbol, is_symbol_start, Lexer};
pub use token::{Position, Token, TokenKind, LITERAL_TOKENS};
