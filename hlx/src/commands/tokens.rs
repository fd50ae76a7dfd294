//! Tokens command implementation.
//!
//! Lexes every input file and prints each token with its kind, line and
//! column, screen position and source text. Files are lexed in parallel;
//! reports keep the command-line order.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use hilex_lex::{Language, Token};
use hilex_util::GlyphMetrics;
use rayon::prelude::*;
use serde::Serialize;

use super::common::{load_metrics, read_sources, resolve_format, resolve_language, SourceFile};
use super::traits::{emit, Report};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to lex.
    pub files: Vec<PathBuf>,
    /// Report format override.
    pub format: Option<String>,
    /// Language override; detected from the extension when absent.
    pub language: Option<String>,
    /// JSON glyph metrics table.
    pub metrics: Option<PathBuf>,
    /// Uniform glyph advance width.
    pub monospace: Option<f32>,
}

/// One token as printed by `hlx tokens`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Display name of the token kind.
    pub kind: &'static str,
    /// Zero-based line.
    pub line: usize,
    /// Zero-based byte column.
    pub column: usize,
    /// Byte offset in the file.
    pub offset: usize,
    /// Horizontal offset in rendering units.
    pub x: f32,
    /// Vertical offset in rendering units.
    pub y: f32,
    /// Source text, lossily decoded.
    pub text: String,
}

/// Every token of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens {
    /// Input path.
    pub path: String,
    /// Language whose keywords were highlighted.
    pub language: &'static str,
    /// Tokens in source order, without the end-of-content token.
    pub tokens: Vec<TokenRecord>,
}

impl FileTokens {
    /// Lexes `source` into a report.
    pub fn collect(
        source: &SourceFile,
        language: Option<Language>,
        metrics: Option<&dyn GlyphMetrics>,
    ) -> Self {
        let lexer = source.lexer(language, metrics);
        let language = lexer.language();
        let tokens = lexer.map(|token| TokenRecord::from(&token)).collect();

        Self {
            path: source.display_path(),
            language: language.name(),
            tokens,
        }
    }
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.name(),
            line: token.line,
            column: token.column,
            offset: token.offset,
            x: token.position.x,
            y: token.position.y,
            text: token.text_str().into_owned(),
        }
    }
}

impl Report for FileTokens {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "==> {} ({}) <==", self.path, self.language)?;
        for token in &self.tokens {
            writeln!(
                out,
                "{:>5}:{:<4} {:<22} {:>9.1} {:>9.1}  {:?}",
                token.line, token.column, token.kind, token.x, token.y, token.text
            )?;
        }
        Ok(())
    }
}

/// Execute the tokens command.
pub fn run_tokens(args: TokensArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();

    let format = resolve_format(args.format.as_deref(), config)?;
    let language = resolve_language(args.language.as_deref())?;
    let atlas = load_metrics(args.metrics.as_deref(), args.monospace, &config.metrics)?;
    let sources = read_sources(&args.files)?;

    let metrics = atlas.as_ref().map(|atlas| atlas as &dyn GlyphMetrics);
    tracing::debug!(
        "lexing {} file(s) on {} thread(s)",
        sources.len(),
        rayon::current_num_threads()
    );

    let reports: Vec<FileTokens> = sources
        .par_iter()
        .map(|source| FileTokens::collect(source, language, metrics))
        .collect();

    if args.verbose {
        let total: usize = reports.iter().map(|r| r.tokens.len()).sum();
        tracing::info!(
            "lexed {} file(s), {} token(s) in {:.2?}",
            reports.len(),
            total,
            start_time.elapsed()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&reports, format, &mut out)
}
