// File: crates/ghg-core/src/render/paint.rs
// Summary: Drawing helpers shared by both scenes: grid, axes, legend strip, tooltip box, paths.

use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::{clamp, PlotArea};
use crate::legend::{Legend, SWATCH};
use crate::render::RenderOptions;
use crate::text::{Anchor, Font, TextShaper};
use crate::tooltip::Tooltip;

const TICK_LEN: f32 = 6.0;
const TICK_FONT: Font = Font::regular(11.0);
const TITLE_FONT: Font = Font::regular(12.0);
const LEGEND_FONT: Font = Font::regular(12.0);
const TOOLTIP_FONT: Font = Font::regular(12.0);
const TOOLTIP_LINE: f32 = 17.0;
const TOOLTIP_PAD: f32 = 8.0;

pub fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Path through plot-local `points`, shifted into surface pixels.
pub fn path_through(plot: &PlotArea, points: &[(f64, f64)], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    let mut iter = points.iter();
    if let Some(&(x0, y0)) = iter.next() {
        path.move_to(((plot.left + x0) as f32, (plot.top + y0) as f32));
        for &(x, y) in iter {
            path.line_to(((plot.left + x) as f32, (plot.top + y) as f32));
        }
        if close {
            path.close();
        }
    }
    path
}

/// Horizontal grid lines at the value ticks.
pub fn draw_grid(canvas: &skia::Canvas, plot: &PlotArea, y_axis: &Axis, opts: &RenderOptions) {
    let paint = stroke(opts.theme.grid, 1.0);
    let (l, r) = (plot.left as f32, plot.right() as f32);
    for tick in &y_axis.ticks {
        let y = (plot.top + tick.offset) as f32;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

/// Bottom and left axis lines, tick marks, tick labels and titles.
pub fn draw_axes(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &PlotArea,
    outer_height: f32,
    x_axis: &Axis,
    y_axis: &Axis,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let axis_paint = stroke(theme.axis_line, 1.0);
    let tick_paint = stroke(theme.tick, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right() as f32, plot.bottom() as f32);

    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    for tick in &x_axis.ticks {
        let x = l + tick.offset as f32;
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
        if opts.draw_labels {
            text.draw(canvas, &tick.label, (x, b + TICK_LEN + 12.0), TICK_FONT, theme.tick, Anchor::Middle);
        }
    }
    for tick in &y_axis.ticks {
        let y = t + tick.offset as f32;
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
        if opts.draw_labels {
            text.draw(canvas, &tick.label, (l - TICK_LEN - 3.0, y + 4.0), TICK_FONT, theme.tick, Anchor::End);
        }
    }

    if !opts.draw_labels {
        return;
    }
    text.draw(canvas, &x_axis.title, ((l + r) * 0.5, outer_height - 6.0), TITLE_FONT, theme.axis_label, Anchor::Middle);

    let (cx, cy) = (15.0_f32, (t + b) * 0.5);
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
    text.draw(canvas, &y_axis.title, (cx, cy + 4.0), TITLE_FONT, theme.axis_label, Anchor::Middle);
    canvas.restore();
}

/// Legend strip whose top-left corner is at `(0, top)`.
pub fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, legend: &Legend, top: f32, width: f32, opts: &RenderOptions) {
    if !opts.draw_legend {
        return;
    }
    for slot in legend.layout(width as f64) {
        let x = slot.x as f32;
        let y = top + slot.y as f32;
        let swatch = skia::Rect::from_xywh(x, y, SWATCH as f32, SWATCH as f32);
        canvas.draw_rect(swatch, &fill(slot.entry.color.to_skia()));
        if opts.draw_labels {
            text.draw(
                canvas,
                &slot.entry.label,
                (x + SWATCH as f32 + 8.0, y + SWATCH as f32 - 3.0),
                LEGEND_FONT,
                opts.theme.legend_text,
                Anchor::Start,
            );
        }
    }
}

/// Floating tooltip box, kept inside the surface.
pub fn draw_tooltip(canvas: &skia::Canvas, text: &TextShaper, tooltip: &Tooltip, surface: (i32, i32), opts: &RenderOptions) {
    if !tooltip.visible || tooltip.rows.is_empty() {
        return;
    }
    let theme = &opts.theme;
    let content_w = tooltip
        .rows
        .iter()
        .map(|row| {
            if opts.draw_labels {
                text.measure(&row.text, TOOLTIP_FONT.with_bold(row.bold))
            } else {
                row.text.chars().count() as f32 * 7.0
            }
        })
        .fold(0.0_f32, f32::max);
    let w = content_w + TOOLTIP_PAD * 2.0;
    let h = tooltip.rows.len() as f32 * TOOLTIP_LINE + TOOLTIP_PAD * 2.0 - 4.0;
    let x = clamp(tooltip.x as f32, 0.0, (surface.0 as f32 - w).max(0.0));
    let y = clamp(tooltip.y as f32, 0.0, (surface.1 as f32 - h).max(0.0));

    let rect = skia::Rect::from_xywh(x, y, w, h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill(theme.tooltip_fill));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke(theme.tooltip_border, 1.0));

    if !opts.draw_labels {
        return;
    }
    for (i, row) in tooltip.rows.iter().enumerate() {
        let color = row.color.map_or(theme.tooltip_text, |c| c.to_skia());
        let baseline = y + TOOLTIP_PAD + TOOLTIP_FONT.size + i as f32 * TOOLTIP_LINE;
        text.draw(canvas, &row.text, (x + TOOLTIP_PAD, baseline), TOOLTIP_FONT.with_bold(row.bold), color, Anchor::Start);
    }
}
