// File: crates/ghg-core/src/render/line.rs
// Summary: Skia painter for the comparative line chart, with optional hover state overlay.

use skia_safe as skia;

use crate::line_chart::{LineChart, LineInteraction, PathStyle};
use crate::render::paint;
use crate::render::{RenderOptions, Scene};
use crate::text::TextShaper;

const FADED_ALPHA: u8 = 51;

fn stroke_for(style: PathStyle) -> (f32, u8) {
    match style {
        PathStyle::Normal => (2.0, 255),
        PathStyle::Highlight => (3.5, 255),
        PathStyle::Faded => (1.5, FADED_ALPHA),
    }
}

pub struct LineScene<'a> {
    pub chart: &'a LineChart,
    pub interaction: Option<&'a LineInteraction>,
}

impl<'a> LineScene<'a> {
    pub fn new(chart: &'a LineChart) -> Self {
        Self { chart, interaction: None }
    }

    pub fn with_interaction(chart: &'a LineChart, interaction: &'a LineInteraction) -> Self {
        Self { chart, interaction: Some(interaction) }
    }

    fn style_of(&self, index: usize) -> PathStyle {
        self.interaction
            .and_then(|i| i.styles.get(index).copied())
            .unwrap_or(PathStyle::Normal)
    }
}

impl Scene for LineScene<'_> {
    fn name(&self) -> &'static str {
        "comparative"
    }

    fn size(&self) -> (i32, i32) {
        self.chart.surface_size()
    }

    fn paint(&self, canvas: &skia::Canvas, text: &TextShaper, opts: &RenderOptions) {
        let chart = self.chart;
        let plot = &chart.plot;
        canvas.clear(opts.theme.background);
        paint::draw_grid(canvas, plot, &chart.y_axis, opts);

        // highlighted path last so it sits on top
        let mut order: Vec<usize> = (0..chart.series.len()).collect();
        order.sort_by_key(|&i| self.style_of(i) == PathStyle::Highlight);
        for i in order {
            let points = chart.path_points(i);
            if points.is_empty() {
                continue;
            }
            let (width, alpha) = stroke_for(self.style_of(i));
            let mut pen = paint::stroke(chart.series[i].color.to_skia_alpha(alpha), width);
            pen.set_stroke_join(skia::paint::Join::Round);
            canvas.draw_path(&paint::path_through(plot, &points, false), &pen);
        }

        paint::draw_axes(canvas, text, plot, chart.layout.height as f32, &chart.x_axis, &chart.y_axis, opts);

        if let Some(state) = self.interaction {
            if let (true, Some(hover)) = (state.focus_visible, state.hover.as_ref()) {
                let x = (plot.left + hover.hover_x) as f32;
                let mut pen = paint::stroke(opts.theme.hover_line, 1.0);
                pen.set_path_effect(skia::PathEffect::dash(&[4.0, 3.0], 0.0));
                canvas.draw_line((x, plot.top as f32), (x, plot.bottom() as f32), &pen);
                for p in &hover.closest {
                    let cx = (plot.left + chart.x.to_px(p.timestamp)) as f32;
                    let cy = (plot.top + chart.y.to_px(p.value)) as f32;
                    canvas.draw_circle((cx, cy), 3.5, &paint::fill(p.color.to_skia()));
                }
            }
        }

        paint::draw_legend(canvas, text, &chart.legend, chart.layout.height as f32, chart.layout.width as f32, opts);

        if let Some(state) = self.interaction {
            paint::draw_tooltip(canvas, text, &state.tooltip, self.size(), opts);
        }
    }
}
