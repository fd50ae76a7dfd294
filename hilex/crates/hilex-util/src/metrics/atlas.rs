//! Table-backed glyph metrics.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{GlyphMetrics, FALLBACK_GLYPH, GLYPH_METRICS_CAPACITY};
use crate::error::{MetricsError, MetricsResult};

/// Metrics of a single rasterized glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetric {
    /// Horizontal advance in rendering units.
    pub ax: f32,

    /// Vertical advance in rendering units.
    #[serde(default)]
    pub ay: f32,
}

impl GlyphMetric {
    /// Creates a metric that only advances horizontally.
    pub const fn horizontal(ax: f32) -> Self {
        Self { ax, ay: 0.0 }
    }
}

/// A validated table of glyph metrics indexed by byte value.
///
/// The table may cover fewer than [`GLYPH_METRICS_CAPACITY`] glyphs, but it
/// always covers [`FALLBACK_GLYPH`] so that out-of-range lookups have an
/// answer.
///
/// # Example
///
/// ```
/// use hilex_util::metrics::{GlyphAtlas, GlyphMetrics};
///
/// let json = r#"{"metrics": [{"ax": 8.0}, {"ax": 8.0, "ay": 0.0}]}"#;
/// // Too short to cover '?', so it is rejected.
/// assert!(GlyphAtlas::from_json(json).is_err());
///
/// let atlas = GlyphAtlas::from_advances(vec![7.5; 128]).unwrap();
/// assert_eq!(atlas.advance(b'W' as usize), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphAtlas {
    metrics: Vec<GlyphMetric>,
}

/// Serialized form, validated before it becomes a [`GlyphAtlas`].
#[derive(Deserialize)]
struct RawAtlas {
    metrics: Vec<GlyphMetric>,
}

impl GlyphAtlas {
    /// Builds an atlas from per-glyph metrics, index `i` describing byte `i`.
    ///
    /// # Errors
    ///
    /// Fails if the table is empty, longer than [`GLYPH_METRICS_CAPACITY`],
    /// too short to contain [`FALLBACK_GLYPH`], or holds an advance that is
    /// negative or not finite.
    pub fn new(metrics: Vec<GlyphMetric>) -> MetricsResult<Self> {
        if metrics.is_empty() {
            return Err(MetricsError::Empty);
        }

        if metrics.len() > GLYPH_METRICS_CAPACITY {
            return Err(MetricsError::TooManyGlyphs {
                len: metrics.len(),
                capacity: GLYPH_METRICS_CAPACITY,
            });
        }

        let fallback = FALLBACK_GLYPH as usize;
        if metrics.len() <= fallback {
            return Err(MetricsError::MissingFallback {
                index: fallback,
                len: metrics.len(),
            });
        }

        if let Some((index, metric)) = metrics
            .iter()
            .enumerate()
            .find(|(_, m)| !m.ax.is_finite() || m.ax < 0.0)
        {
            return Err(MetricsError::InvalidAdvance {
                index,
                value: metric.ax,
            });
        }

        log::debug!("built glyph atlas with {} entries", metrics.len());
        Ok(Self { metrics })
    }

    /// Builds an atlas from horizontal advances only.
    pub fn from_advances(advances: Vec<f32>) -> MetricsResult<Self> {
        Self::new(advances.into_iter().map(GlyphMetric::horizontal).collect())
    }

    /// Builds a full-range atlas where every glyph has the same advance.
    ///
    /// Negative or non-finite widths are clamped to zero.
    pub fn monospace(advance: f32) -> Self {
        let advance = if advance.is_finite() { advance.max(0.0) } else { 0.0 };
        Self {
            metrics: vec![GlyphMetric::horizontal(advance); GLYPH_METRICS_CAPACITY],
        }
    }

    /// Decodes and validates an atlas from its JSON form
    /// (`{"metrics": [{"ax": .., "ay": ..}, ..]}`).
    pub fn from_json(json: &str) -> MetricsResult<Self> {
        let raw: RawAtlas = serde_json::from_str(json)?;
        Self::new(raw.metrics)
    }

    /// Decodes and validates an atlas from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> MetricsResult<Self> {
        let raw: RawAtlas = serde_json::from_reader(reader)?;
        Self::new(raw.metrics)
    }

    /// Encodes the atlas as JSON.
    pub fn to_json(&self) -> MetricsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the metric for `index`, if the table covers it.
    pub fn get(&self, index: usize) -> Option<&GlyphMetric> {
        self.metrics.get(index)
    }

    /// Returns the number of glyphs in the table.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl GlyphMetrics for GlyphAtlas {
    fn capacity(&self) -> usize {
        self.metrics.len()
    }

    fn advance(&self, index: usize) -> f32 {
        self.metrics
            .get(index)
            .unwrap_or(&self.metrics[FALLBACK_GLYPH as usize])
            .ax
    }
}
