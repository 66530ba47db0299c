use vitrine_protocol::BarOffset;

use crate::config::ScrollConfig;

/// Moves the fixed title bar up slower than the page, never more than a
/// fraction of its own height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBar {
    height: f64,
    speed: f64,
    cap_fraction: f64,
}

impl TitleBar {
    /// `height` is the bar's measured height, taken once at load.
    pub fn new(height: f64, config: &ScrollConfig) -> Self {
        Self {
            height: height.max(0.0),
            speed: config.bar_speed,
            cap_fraction: config.bar_cap_fraction,
        }
    }

    pub fn offset(&self, scroll_y: f64) -> BarOffset {
        BarOffset {
            offset: bar_offset(scroll_y, self.height, self.speed, self.cap_fraction),
        }
    }
}

/// `min(y * speed, height * cap_fraction)`, with overscroll (`y < 0`) read as 0.
pub fn bar_offset(scroll_y: f64, height: f64, speed: f64, cap_fraction: f64) -> f64 {
    let y = if scroll_y > 0.0 { scroll_y } else { 0.0 };
    (y * speed).min(height * cap_fraction)
}
