// File: crates/ghg-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pointer and pixel math.

use crate::types::ChartLayout;

/// Pointer position in surface pixels (origin at the top-left of the chart surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot rectangle inside a chart surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_layout(layout: &ChartLayout) -> Self {
        Self {
            left: layout.margin.left as f64,
            top: layout.margin.top as f64,
            width: layout.plot_width(),
            height: layout.plot_height(),
        }
    }

    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    pub fn contains(&self, p: Pointer) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Translate a surface pointer into plot-local coordinates.
    pub fn to_local(&self, p: Pointer) -> (f64, f64) {
        (p.x - self.left, p.y - self.top)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
