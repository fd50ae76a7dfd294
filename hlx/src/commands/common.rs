//! Common types and utilities for hlx commands.
//!
//! This module provides input loading, option resolution against the
//! configuration file, and the shared error message templates.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hilex_lex::{Language, Lexer};
use hilex_util::{GlyphAtlas, GlyphMetrics};

use crate::config::{Config, MetricsConfig};
use crate::error::{HlxError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = HlxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(HlxError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Picks the report format: command line first, then the config file.
pub fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(name) => name.parse(),
        None => config.output.format.parse().map_err(|_| {
            HlxError::Config(format!(
                "{}: {}",
                error_messages::INVALID_CONFIG_FORMAT,
                config.output.format
            ))
        }),
    }
}

/// Parses a `--language` override.
pub fn resolve_language(name: Option<&str>) -> Result<Option<Language>> {
    name.map(|name| {
        Language::from_name(name).ok_or_else(|| {
            HlxError::Validation(format!("{}: {}", error_messages::UNKNOWN_LANGUAGE, name))
        })
    })
    .transpose()
}

// ============================================================================
// Glyph Metrics
// ============================================================================

/// Builds the glyph metrics for horizontal offsets.
///
/// Precedence: `--metrics`, `--monospace`, then `[metrics] table` and
/// `[metrics] monospace` from the config file. Returns `None` when nothing
/// is configured.
pub fn load_metrics(
    table: Option<&Path>,
    monospace: Option<f32>,
    config: &MetricsConfig,
) -> Result<Option<GlyphAtlas>> {
    if let Some(path) = table {
        return read_metrics_table(path).map(Some);
    }
    if let Some(width) = monospace {
        return monospace_atlas(width).map(Some);
    }
    if let Some(path) = &config.table {
        return read_metrics_table(path).map(Some);
    }
    config.monospace.map(monospace_atlas).transpose()
}

fn read_metrics_table(path: &Path) -> Result<GlyphAtlas> {
    let file = std::fs::File::open(path).map_err(|e| {
        HlxError::FileOperation(format!(
            "{} {}: {}",
            error_messages::READ_METRICS_FAILED,
            path.display(),
            e
        ))
    })?;
    let atlas = GlyphAtlas::from_reader(std::io::BufReader::new(file))?;
    tracing::debug!("loaded {} glyph metrics from {}", atlas.len(), path.display());
    Ok(atlas)
}

fn monospace_atlas(width: f32) -> Result<GlyphAtlas> {
    if !width.is_finite() || width < 0.0 {
        return Err(HlxError::Validation(format!(
            "{}: {}",
            error_messages::INVALID_ADVANCE,
            width
        )));
    }
    Ok(GlyphAtlas::monospace(width))
}

// ============================================================================
// Source Files
// ============================================================================

/// One input file, read fully into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

impl SourceFile {
    /// Reads a file from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| {
            HlxError::FileOperation(format!(
                "{} {}: {}",
                error_messages::READ_FAILED,
                path.display(),
                e
            ))
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Creates a lexer over this file.
    ///
    /// The language comes from `language` when given, otherwise from the
    /// file extension.
    pub fn lexer<'a>(
        &'a self,
        language: Option<Language>,
        metrics: Option<&'a dyn GlyphMetrics>,
    ) -> Lexer<'a> {
        match language {
            Some(language) => Lexer::with_language(&self.content, language, metrics),
            None => Lexer::new(&self.content, Some(self.path.as_path()), metrics),
        }
    }

    /// Path for display in reports.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads every input, failing on the first file that cannot be read.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    if paths.is_empty() {
        return Err(HlxError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    paths.iter().map(|path| SourceFile::read(path)).collect()
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when an input file cannot be read.
    pub const READ_FAILED: &str = "Failed to read";

    /// Error when a metrics table cannot be opened.
    pub const READ_METRICS_FAILED: &str = "Failed to read glyph metrics";

    /// Error when an unknown report format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the config file names an unknown report format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration";

    /// Error when an unknown language is specified.
    pub const UNKNOWN_LANGUAGE: &str = "Unknown language";

    /// Error when a monospace advance is negative or not finite.
    pub const INVALID_ADVANCE: &str = "Advance width must be a finite, non-negative number";
}
