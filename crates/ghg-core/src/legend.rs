// File: crates/ghg-core/src/legend.rs
// Summary: Legend model (swatch + label per entry) with a simple wrapping row layout.

use crate::format::escape_html;
use crate::theme::Rgb;

pub const SWATCH: f64 = 16.0;
pub const ROW_HEIGHT: f64 = 24.0;
const PADDING: f64 = 8.0;
const LABEL_GAP: f64 = 8.0;
const ITEM_GAP: f64 = 18.0;
/// Average glyph advance used to estimate label widths before any font is loaded.
const CHAR_WIDTH: f64 = 7.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Placed legend entry; coordinates relative to the legend's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSlot<'a> {
    pub x: f64,
    pub y: f64,
    pub entry: &'a LegendEntry,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    fn item_width(entry: &LegendEntry) -> f64 {
        SWATCH + LABEL_GAP + entry.label.chars().count() as f64 * CHAR_WIDTH
    }

    /// Wrap entries left-to-right into rows no wider than `width`.
    pub fn layout(&self, width: f64) -> Vec<LegendSlot<'_>> {
        let mut slots = Vec::with_capacity(self.entries.len());
        let (mut x, mut y) = (PADDING, PADDING);
        for entry in &self.entries {
            let w = Self::item_width(entry);
            if x > PADDING && x + w > width - PADDING {
                x = PADDING;
                y += ROW_HEIGHT;
            }
            slots.push(LegendSlot { x, y, entry });
            x += w + ITEM_GAP;
        }
        slots
    }

    /// Height needed to draw the legend at `width`, including padding.
    pub fn height(&self, width: f64) -> f64 {
        match self.layout(width).last() {
            Some(last) => last.y + ROW_HEIGHT + PADDING,
            None => 0.0,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"legend\">");
        for e in &self.entries {
            html.push_str(&format!(
                "<div class=\"legend-item\"><span class=\"legend-color-box\" style=\"background-color: {}\"></span><span class=\"legend-text\">{}</span></div>",
                e.color,
                escape_html(&e.label)
            ));
        }
        html.push_str("</div>");
        html
    }
}
