//! Parallax and fade for content sections.
//!
//! Two passes:
//! - the geometry pass measures each section's card against the viewport and
//!   caches a [`SectionGeometry`];
//! - the update pass, run every scroll tick, turns the section's live
//!   bounding-rect top into a [`SectionStyle`].
//!
//! The update pass never touches geometry. Only [`Parallax::measure`] does.

use vitrine_protocol::{Rect, SectionStyle, Viewport};

use crate::config::{ParallaxMode, ScrollConfig};

/// Layout-derived constants of one section, valid until the next geometry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Largest background shift, in pixels.
    pub shift_max: f64,
    /// Scroll distance over which progress goes from 0 to 1.
    pub scroll_span: f64,
}

impl SectionGeometry {
    pub fn measure(card_height: f64, viewport_height: f64, gap: f64) -> Self {
        Self {
            shift_max: (card_height - viewport_height + 2.0 * gap).max(0.0),
            scroll_span: (card_height - 2.0 * gap).max(1.0),
        }
    }
}

/// `clamp((-top + gap) / scroll_span, 0, 1)`.
pub fn size_aware_progress(top: f64, geometry: &SectionGeometry, gap: f64) -> f64 {
    ((-top + gap) / geometry.scroll_span).clamp(0.0, 1.0)
}

/// 0 when the section's top enters the bottom of the viewport, 1 when its
/// bottom leaves the top.
pub fn classic_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// Opacity for a given progress: 1 until `fade_start`, then linear down to
/// exactly 0 at progress 1.
pub fn fade_alpha(progress: f64, fade_start: f64) -> f64 {
    if progress < fade_start {
        1.0
    } else if progress >= 1.0 {
        0.0
    } else {
        1.0 - (progress - fade_start) / (1.0 - fade_start)
    }
}

/// Per-page parallax engine holding the cached geometry of every section.
#[derive(Debug, Clone)]
pub struct Parallax {
    config: ScrollConfig,
    geometry: Vec<Option<SectionGeometry>>,
}

impl Parallax {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            geometry: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Geometry pass. `card_heights[i]` is the height of section `i`'s card,
    /// or `None` when the section has no card.
    pub fn measure(&mut self, card_heights: &[Option<f64>], viewport_height: f64) {
        let gap = self.config.gap;
        self.geometry = card_heights
            .iter()
            .map(|h| h.map(|h| SectionGeometry::measure(h, viewport_height, gap)))
            .collect();
        tracing::debug!(sections = self.geometry.len(), viewport_height, "measured sections");
    }

    /// Cached geometry of section `index`, `None` if it has no card or was
    /// never measured.
    pub fn geometry(&self, index: usize) -> Option<SectionGeometry> {
        self.geometry.get(index).copied().flatten()
    }

    /// Update pass for section `index` whose bounding rect is `rect`.
    ///
    /// `shift` is the value written to `--shift`: `-progress * shift_max` in
    /// size-aware mode, a slide from `-amplitude` to `+amplitude` in classic
    /// mode. In size-aware mode a section without measured geometry stays at
    /// [`SectionStyle::REST`].
    pub fn update(&self, index: usize, rect: &Rect, viewport: &Viewport) -> SectionStyle {
        let (progress, shift) = match self.config.mode {
            ParallaxMode::SizeAware => {
                let Some(geometry) = self.geometry(index) else {
                    return SectionStyle::REST;
                };
                let progress = size_aware_progress(rect.top(), &geometry, self.config.gap);
                (progress, -(progress * geometry.shift_max))
            }
            ParallaxMode::Classic => {
                let progress = classic_progress(rect.top(), rect.h, viewport.height);
                let amplitude = self.config.classic_amplitude;
                (progress, progress * 2.0 * amplitude - amplitude)
            }
        };
        SectionStyle {
            shift,
            alpha: fade_alpha(progress, self.config.fade_start),
        }
    }

    pub fn update_all(&self, rects: &[Rect], viewport: &Viewport) -> Vec<SectionStyle> {
        rects
            .iter()
            .enumerate()
            .map(|(i, rect)| self.update(i, rect, viewport))
            .collect()
    }
}
