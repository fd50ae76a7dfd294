//! Error handling module for the hlx CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use hilex_util::MetricsError;
use thiserror::Error;

/// Main error type for the hlx CLI application.
#[derive(Error, Debug)]
pub enum HlxError {
    /// Error when configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a command-line value is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization/deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a glyph metrics table is rejected.
    #[error("Glyph metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

/// Result type alias using HlxError.
pub type Result<T> = std::result::Result<T, HlxError>;
