use serde::{Deserialize, Serialize};

/// A layout rectangle in CSS pixels, relative to the viewport.
///
/// Mirrors the fields of `getBoundingClientRect()` that the scroll engine
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

}

/// The visible window at the time of one scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    /// Vertical document scroll offset (`window.scrollY`).
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(height: f64, scroll_y: f64) -> Self {
        Self {
            height,
            scroll_y,
        }
    }
}

/// Per-section output of the parallax/fade engine for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionStyle {
    /// Background image offset in pixels.
    pub shift: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl SectionStyle {
    /// Fully visible, unshifted.
    pub const REST: Self = Self {
        shift: 0.0,
        alpha: 1.0,
    };
}

/// Title bar translation for one tick, in pixels (applied upwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarOffset {
    pub offset: f64,
}

impl BarOffset {
    /// CSS `transform` value moving the bar up by `offset` pixels.
    pub fn to_transform(self) -> String {
        format!("translateY(-{}px)", self.offset)
    }
}
