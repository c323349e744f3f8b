// File: crates/ghg-core/src/types.rs
// Summary: Shared layout types and constants (surface sizes, margins).

use serde::Deserialize;

/// Default comparative (line) chart surface size in pixels.
pub const LINE_WIDTH: i32 = 800;
pub const LINE_HEIGHT: i32 = 450;
/// Default cumulative (stacked area) chart surface size in pixels.
pub const AREA_WIDTH: i32 = 700;
pub const AREA_HEIGHT: i32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 30, 20, 40)
    }
}

/// Outer size of a chart plus the margins around its plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub margin: Insets,
}

impl ChartLayout {
    pub const fn new(width: i32, height: i32, margin: Insets) -> Self {
        Self { width, height, margin }
    }

    pub const fn line_default() -> Self {
        Self::new(LINE_WIDTH, LINE_HEIGHT, Insets::new(60, 30, 20, 40))
    }

    pub const fn area_default() -> Self {
        Self::new(AREA_WIDTH, AREA_HEIGHT, Insets::new(60, 30, 20, 50))
    }

    /// Width of the plot area (outer width minus horizontal margins), never negative.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.hsum() as i32).max(0) as f64
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.vsum() as i32).max(0) as f64
    }
}
