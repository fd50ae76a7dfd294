//! Core error types for hilex-util
//!
//! Metric tables are validated once, when they are built. After that the
//! lexer can query them without any error path.

use thiserror::Error;

/// Error type for glyph metric table construction
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The table has no entries at all
    #[error("Glyph metric table is empty")]
    Empty,

    /// The table has more entries than the supported glyph range
    #[error("Glyph metric table has {len} entries, capacity is {capacity}")]
    TooManyGlyphs {
        /// Number of entries supplied
        len: usize,
        /// Largest supported table size
        capacity: usize,
    },

    /// An advance is negative, NaN, or infinite
    #[error("Invalid advance {value} for glyph index {index}")]
    InvalidAdvance {
        /// Glyph index of the bad entry
        index: usize,
        /// The rejected advance
        value: f32,
    },

    /// The fallback glyph has no entry in a partial table
    #[error("Glyph metric table must cover the fallback glyph (index {index}), got {len} entries")]
    MissingFallback {
        /// Index of the fallback glyph
        index: usize,
        /// Number of entries supplied
        len: usize,
    },

    /// The serialized table could not be decoded
    #[error("Failed to decode glyph metrics: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for metric table operations
pub type MetricsResult<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_glyphs_display() {
        let err = MetricsError::TooManyGlyphs {
            len: 300,
            capacity: 128,
        };
        assert_eq!(
            err.to_string(),
            "Glyph metric table has 300 entries, capacity is 128"
        );
    }

    #[test]
    fn test_invalid_advance_display() {
        let err = MetricsError::InvalidAdvance {
            index: 65,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid advance -1 for glyph index 65");
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MetricsError = json_err.into();
        assert!(matches!(err, MetricsError::Decode(_)));
    }
}
