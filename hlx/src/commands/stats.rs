//! Stats command implementation.
//!
//! Summarizes each input file: detected language, size, line count and
//! the number of tokens of every kind.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use hilex_lex::{Language, TokenKind};
use rayon::prelude::*;
use serde::Serialize;

use super::common::{read_sources, resolve_format, resolve_language, SourceFile};
use super::traits::{emit, Report};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to summarize.
    pub files: Vec<PathBuf>,
    /// Report format override.
    pub format: Option<String>,
    /// Language override; detected from the extension when absent.
    pub language: Option<String>,
}

/// Token counts for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    /// Input path.
    pub path: String,
    /// Language whose keywords were highlighted.
    pub language: &'static str,
    /// File size in bytes.
    pub bytes: usize,
    /// Number of lines.
    pub lines: usize,
    /// Number of tokens, excluding end of content.
    pub tokens: usize,
    /// Non-zero token counts keyed by kind name.
    pub kinds: BTreeMap<&'static str, usize>,
}

impl FileStats {
    /// Lexes `source` and counts its tokens.
    pub fn collect(source: &SourceFile, language: Option<Language>) -> Self {
        let mut lexer = source.lexer(language, None);
        let mut kinds = BTreeMap::new();
        let mut tokens = 0;
        for token in lexer.by_ref() {
            *kinds.entry(token.kind.name()).or_insert(0) += 1;
            tokens += 1;
        }

        let content = &source.content;
        let unterminated = !content.is_empty() && !content.ends_with(b"\n");

        Self {
            path: source.display_path(),
            language: lexer.language().name(),
            bytes: content.len(),
            lines: lexer.line() + usize::from(unterminated),
            tokens,
            kinds,
        }
    }

    /// Count for one kind, zero if absent.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.kinds.get(kind.name()).copied().unwrap_or(0)
    }
}

impl Report for FileStats {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} ({})", self.path, self.language)?;
        writeln!(
            out,
            "  bytes: {}  lines: {}  tokens: {}",
            self.bytes, self.lines, self.tokens
        )?;
        for kind in TokenKind::ALL {
            let count = self.count(kind);
            if count > 0 {
                writeln!(out, "  {:<22} {:>8}", kind.name(), count)?;
            }
        }
        Ok(())
    }
}

/// Execute the stats command.
pub fn run_stats(args: StatsArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let language = resolve_language(args.language.as_deref())?;
    let sources = read_sources(&args.files)?;

    let reports: Vec<FileStats> = sources
        .par_iter()
        .map(|source| FileStats::collect(source, language))
        .collect();

    if args.verbose {
        let bytes: usize = reports.iter().map(|r| r.bytes).sum();
        tracing::info!("summarized {} file(s), {} byte(s)", reports.len(), bytes);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&reports, format, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(path: &str, content: &str) -> FileStats {
        let source = SourceFile {
            path: PathBuf::from(path),
            content: content.as_bytes().to_vec(),
        };
        FileStats::collect(&source, None)
    }

    #[test]
    fn test_counts_by_kind() {
        let report = stats("main.c", "int main() { return x; }\n");
        assert_eq!(report.language, "C++");
        assert_eq!(report.tokens, 9);
        assert_eq!(report.count(TokenKind::Keyword), 2);
        assert_eq!(report.count(TokenKind::Symbol), 2);
        assert_eq!(report.count(TokenKind::Semicolon), 1);
        assert_eq!(report.count(TokenKind::Comment), 0);
        assert!(!report.kinds.contains_key("comment"));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(stats("a.c", "").lines, 0);
        assert_eq!(stats("a.c", "x").lines, 1);
        assert_eq!(stats("a.c", "x\n").lines, 1);
        assert_eq!(stats("a.c", "x\ny").lines, 2);
        assert_eq!(stats("a.c", "\n\n\n").lines, 3);
    }

    #[test]
    fn test_text_lists_only_present_kinds() {
        let report = stats("a.py", "def f(): pass\n");
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("a.py (Python)\n"));
        assert!(text.contains("keyword"));
        assert!(text.contains("invalid token"));
        assert!(!text.contains("semicolon"));
    }
}
