//! Glyph metrics - the advance-width collaborator of the lexer.
//!
//! The lexer does not measure text. It asks a [`GlyphMetrics`] provider how
//! far the pen moves for each byte it consumes, and accumulates those widths
//! into the horizontal offset reported on every token.
//!
//! Providers cover a contiguous range of glyph indices starting at zero
//! (see [`GlyphMetrics::capacity`]). Bytes outside that range are measured
//! as [`FALLBACK_GLYPH`], the same placeholder a renderer draws for them.
//!
//! # Example
//!
//! ```
//! use hilex_util::metrics::{GlyphAtlas, GlyphMetrics, FALLBACK_GLYPH};
//!
//! let atlas = GlyphAtlas::monospace(10.0);
//! assert_eq!(atlas.capacity(), 128);
//! assert_eq!(atlas.advance_for_byte(0xE9), atlas.advance(FALLBACK_GLYPH as usize));
//! ```

mod atlas;

pub use atlas::{GlyphAtlas, GlyphMetric};

use std::sync::Arc;

/// Number of glyph slots a full atlas carries (the ASCII range).
pub const GLYPH_METRICS_CAPACITY: usize = 128;

/// Height of one text line in rendering units.
///
/// Token positions use a top-down convention: line `n` sits at
/// `y = -(n as f32) * FONT_SIZE`.
pub const FONT_SIZE: f32 = 64.0;

/// Placeholder glyph used for bytes the provider has no metrics for.
pub const FALLBACK_GLYPH: u8 = b'?';

/// Source of per-glyph horizontal advance widths.
///
/// Implementations must be safe to read from several threads at once, since
/// independent lexers may share one provider.
pub trait GlyphMetrics: Sync {
    /// Number of glyph indices this provider has metrics for.
    ///
    /// Indices `0..capacity()` are valid arguments to [`advance`](Self::advance).
    fn capacity(&self) -> usize;

    /// Horizontal advance of the glyph at `index`.
    ///
    /// Indices at or beyond [`capacity`](Self::capacity) must be answered with
    /// the fallback glyph's advance, never with a panic.
    fn advance(&self, index: usize) -> f32;

    /// Advance of a source byte, substituting [`FALLBACK_GLYPH`] for bytes
    /// outside the supported range.
    #[inline]
    fn advance_for_byte(&self, byte: u8) -> f32 {
        let index = byte as usize;
        if index < self.capacity() {
            self.advance(index)
        } else {
            self.advance(FALLBACK_GLYPH as usize)
        }
    }
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn advance(&self, index: usize) -> f32 {
        (**self).advance(index)
    }
}

impl<T: GlyphMetrics + Send + ?Sized> GlyphMetrics for Arc<T> {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn advance(&self, index: usize) -> f32 {
        (**self).advance(index)
    }
}
