use serde::{Deserialize, Serialize};

/// An axis-aligned box in viewport coordinates (CSS pixels).
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

    pub fn area(&self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Window scroll state sampled when intersection data arrives.
///
/// Used only for the edge cases where no section is visible: at the very top
/// the first section wins, at the very bottom the last one does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// `window.innerHeight`.
    pub viewport_height: f64,
    /// Rendered height of the document body.
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_top(&self, tolerance: f64) -> bool {
        self.scroll_y < tolerance
    }

    pub fn at_bottom(&self, tolerance: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - tolerance
    }
}
