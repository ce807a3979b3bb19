//! Floating button that jumps to the bottom of the page, or back to the top
//! once the reader is already there.

/// Distance from the bottom, in pixels, that still counts as "at the bottom".
pub const NEAR_BOTTOM_THRESHOLD: f64 = 100.0;

/// Page scroll state, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub window_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.scroll_y + self.window_height >= self.document_height - NEAR_BOTTOM_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollButton {
    metrics: ScrollMetrics,
}

impl ScrollButton {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self { metrics }
    }

    /// Call on every page scroll.
    pub fn update(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    pub fn glyph(&self) -> &'static str {
        if self.metrics.near_bottom() {
            "↑"
        } else {
            "↓"
        }
    }

    /// The offset to smooth-scroll to.
    pub fn click(&self) -> f64 {
        if self.metrics.near_bottom() {
            0.0
        } else {
            self.metrics.document_height
        }
    }
}
