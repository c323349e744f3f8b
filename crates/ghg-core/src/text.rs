// File: crates/ghg-core/src/text.rs
// Summary: Label shaping and drawing on top of Skia textlayout (system font fallback).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Horizontal placement of a label relative to its anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Size and weight of a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn with_bold(self, bold: bool) -> Self {
        Self { size: self.size, bold }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn shape(&self, text: &str, font: Font, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(font.size.max(1.0));
        style.set_color(color);
        style.set_font_families(&FAMILIES);
        if font.bold {
            style.set_font_style(skia::FontStyle::bold());
        }

        let mut para_style = ParagraphStyle::new();
        para_style.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&para_style, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Advance width of `text` on a single line.
    pub fn measure(&self, text: &str, font: Font) -> f32 {
        self.shape(text, font, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` with its baseline at `y`, placed around `x` per `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), font: Font, color: skia::Color, anchor: Anchor) {
        let paragraph = self.shape(text, font, color);
        let width = paragraph.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        // paragraphs paint from their top-left; ascent approximated as 0.8 em
        paragraph.paint(canvas, (left, y - font.size * 0.8));
    }
}
