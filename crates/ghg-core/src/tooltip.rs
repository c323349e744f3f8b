// File: crates/ghg-core/src/tooltip.rs
// Summary: Single floating tooltip shared by a chart: anchor, visibility and styled rows.

use crate::format::escape_html;
use crate::geometry::Pointer;
use crate::theme::Rgb;

/// Tooltip offset from the pointer, in pixels.
pub const OFFSET_X: f64 = 15.0;
pub const OFFSET_Y: f64 = -10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub text: String,
    /// `None` uses the theme's tooltip text color.
    pub color: Option<Rgb>,
    pub bold: bool,
}

impl TooltipRow {
    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None, bold: true }
    }

    pub fn colored(text: impl Into<String>, color: Rgb, bold: bool) -> Self {
        Self { text: text.into(), color: Some(color), bold }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    /// Top-left corner in surface pixels.
    pub x: f64,
    pub y: f64,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    /// Show `rows` next to `pointer`.
    pub fn show_at(&mut self, pointer: Pointer, rows: Vec<TooltipRow>) {
        self.move_to(pointer);
        self.rows = rows;
        self.visible = true;
    }

    /// Follow the pointer without changing content.
    pub fn move_to(&mut self, pointer: Pointer) {
        self.x = pointer.x + OFFSET_X;
        self.y = pointer.y + OFFSET_Y;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// HTML fragment of the rows, as shown by a host page.
    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                let mut style = String::new();
                if let Some(c) = row.color {
                    style.push_str(&format!("color: {c};"));
                }
                if row.bold {
                    if !style.is_empty() {
                        style.push(' ');
                    }
                    style.push_str("font-weight: bold;");
                }
                format!("<div style=\"{}\">{}</div>", style, escape_html(&row.text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_from_pointer() {
        let mut t = Tooltip::default();
        t.show_at(Pointer::new(100.0, 50.0), vec![TooltipRow::bold("2015")]);
        assert!(t.visible);
        assert_eq!((t.x, t.y), (115.0, 40.0));
        t.hide();
        assert!(!t.visible);
    }

    #[test]
    fn html_fragment() {
        let mut t = Tooltip::default();
        t.show_at(
            Pointer::new(0.0, 0.0),
            vec![TooltipRow::bold("2015"), TooltipRow::colored("Canada: 19,600.0", Rgb::new(0xe1, 0x57, 0x59), false)],
        );
        assert_eq!(
            t.to_html(),
            "<div style=\"font-weight: bold;\">2015</div><div style=\"color: #e15759;\">Canada: 19,600.0</div>"
        );
    }
}
