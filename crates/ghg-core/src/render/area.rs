// File: crates/ghg-core/src/render/area.rs
// Summary: Skia painter for the cumulative stacked-area chart.

use skia_safe as skia;

use crate::area_chart::{AreaChart, AreaInteraction};
use crate::render::paint;
use crate::render::{RenderOptions, Scene};
use crate::text::TextShaper;

const FILL_ALPHA: u8 = 217;

pub struct AreaScene<'a> {
    pub chart: &'a AreaChart,
    pub interaction: Option<&'a AreaInteraction>,
}

impl<'a> AreaScene<'a> {
    pub fn new(chart: &'a AreaChart) -> Self {
        Self { chart, interaction: None }
    }

    pub fn with_interaction(chart: &'a AreaChart, interaction: &'a AreaInteraction) -> Self {
        Self { chart, interaction: Some(interaction) }
    }
}

impl Scene for AreaScene<'_> {
    fn name(&self) -> &'static str {
        "cumulative"
    }

    fn size(&self) -> (i32, i32) {
        self.chart.surface_size()
    }

    fn paint(&self, canvas: &skia::Canvas, text: &TextShaper, opts: &RenderOptions) {
        let chart = self.chart;
        let plot = &chart.plot;
        canvas.clear(opts.theme.background);
        paint::draw_grid(canvas, plot, &chart.y_axis, opts);

        let hovered = self.interaction.and_then(|i| i.hovered);
        for (i, layer) in chart.layers.iter().enumerate() {
            let outline = chart.polygon(i);
            if outline.is_empty() {
                continue;
            }
            let path = paint::path_through(plot, &outline, true);
            canvas.draw_path(&path, &paint::fill(layer.color.to_skia_alpha(FILL_ALPHA)));
            if hovered == Some(i) {
                canvas.draw_path(&path, &paint::stroke(opts.theme.axis_line, 1.5));
            }
        }

        paint::draw_axes(canvas, text, plot, chart.layout.height as f32, &chart.x_axis, &chart.y_axis, opts);
        paint::draw_legend(canvas, text, &chart.legend, chart.layout.height as f32, chart.layout.width as f32, opts);

        if let Some(state) = self.interaction {
            paint::draw_tooltip(canvas, text, &state.tooltip, self.size(), opts);
        }
    }
}
