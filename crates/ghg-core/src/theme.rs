// File: crates/ghg-core/src/theme.rs
// Summary: Light/Dark theming, renderer-independent colors and the categorical palette.

use serde::Deserialize;
use skia_safe as skia;
use std::fmt;

use crate::error::InvalidColor;

/// Tableau-10 categorical scheme, in scheme order.
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f",
    "#edc948", "#b07aa1", "#ff9da7", "#9c755f", "#bab0ab",
];

/// Opaque RGB color, independent of the drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.r, self.g, self.b)
    }

    pub fn to_skia_alpha(self, alpha: u8) -> skia::Color {
        skia::Color::from_argb(alpha, self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value).ok_or(InvalidColor(value))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub fn tableau10_colors() -> Vec<Rgb> {
    TABLEAU10.iter().filter_map(|h| Rgb::parse_hex(h)).collect()
}

/// Ordinal color assignment over a fixed list of colors; wraps when exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn tableau10() -> Self {
        Self::new(tableau10_colors())
    }

    /// Color of the `index`-th domain entry.
    pub fn color(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::new(0, 0, 0);
        }
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub hover_line: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 236, 236, 240),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            hover_line: skia::Color::from_argb(255, 150, 150, 150),
            tooltip_fill: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 190, 190, 200),
            tooltip_text: skia::Color::from_argb(255, 30, 30, 40),
            legend_text: skia::Color::from_argb(255, 40, 40, 50),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            hover_line: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_fill: skia::Color::from_argb(235, 32, 32, 38),
            tooltip_border: skia::Color::from_argb(255, 80, 80, 90),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            legend_text: skia::Color::from_argb(255, 210, 210, 220),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::parse_hex("#4E79A7"), Some(Rgb::new(0x4e, 0x79, 0xa7)));
        assert_eq!(Rgb::parse_hex("76b7b2"), Some(Rgb::new(0x76, 0xb7, 0xb2)));
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn palette_wraps() {
        let p = Palette::tableau10();
        assert_eq!(p.len(), 10);
        assert_eq!(p.color(0), p.color(10));
        assert_eq!(p.color(2).to_string(), "#e15759");
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
