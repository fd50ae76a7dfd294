//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `string` - Double-quoted string literals
//! - `comment` - `#` directives and `//` line comments
//! - `literal` - Fixed-text punctuation tokens
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod literal;
mod string;

pub use self::core::Lexer;
pub use identifier::{is_symbol, is_symbol_start};
