//! hilex-util - Foundation types shared by the hilex crates
//!
//! This crate holds the pieces of hilex that are not lexing themselves but
//! that the lexer and its hosts both need:
//!
//! - [`metrics`] - the glyph-metrics collaborator interface the lexer queries
//!   for horizontal advance widths, plus a table-backed implementation
//! - [`error`] - error types for building metric tables
//!
//! # Example
//!
//! ```
//! use hilex_util::{GlyphAtlas, GlyphMetrics};
//!
//! let atlas = GlyphAtlas::monospace(9.0);
//! assert_eq!(atlas.advance(b'a' as usize), 9.0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod metrics;

pub use error::{MetricsError, MetricsResult};
pub use metrics::{
    GlyphAtlas, GlyphMetric, GlyphMetrics, FALLBACK_GLYPH, FONT_SIZE, GLYPH_METRICS_CAPACITY,
};
