// File: crates/ghg-core/src/area_chart.rs
// Summary: Cumulative stacked-area chart: stack layout, fixed colors, legend and band hit-testing.

use crate::axis::Axis;
use crate::config::{AreaChartConfig, ColorOverride};
use crate::format;
use crate::geometry::{PlotArea, Pointer};
use crate::legend::{Legend, LegendEntry};
use crate::scale::{date_to_days, LinearScale, TimeScale};
use crate::stack::{max_top, stack, StackBand};
use crate::theme::{Palette, Rgb};
use crate::tooltip::{Tooltip, TooltipRow};
use crate::types::ChartLayout;
use crate::views::PeriodRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct AreaLayer {
    /// Entity code.
    pub key: String,
    /// Name shown on hover; the override display name when one exists.
    pub label: String,
    pub color: Rgb,
    pub bands: Vec<StackBand>,
}

#[derive(Clone, Debug)]
pub struct AreaChart {
    pub layout: ChartLayout,
    pub plot: PlotArea,
    pub x: TimeScale,
    pub y: LinearScale,
    /// Bottom-to-top.
    pub layers: Vec<AreaLayer>,
    pub legend: Legend,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

/// Override color for `code`, else the palette color at its stack position.
pub fn layer_color(code: &str, index: usize, palette: &Palette, overrides: &[ColorOverride]) -> Rgb {
    overrides
        .iter()
        .find(|o| o.code == code)
        .map_or_else(|| palette.color(index), |o| o.color)
}

impl AreaChart {
    /// Build the chart; `None` when `records` is empty.
    pub fn new(records: &[PeriodRecord], stack_order: &[String], cfg: &AreaChartConfig) -> Option<Self> {
        let first = records.first()?;
        let (t0, t1) = records
            .iter()
            .fold((first.timestamp, first.timestamp), |(lo, hi), r| (lo.min(r.timestamp), hi.max(r.timestamp)));
        let layout = cfg.layout;
        let plot = PlotArea::from_layout(&layout);

        let stacked = stack(records, stack_order);
        let x = TimeScale::new((t0, t1), (0.0, plot.width));
        let y = LinearScale::new((0.0, max_top(&stacked) * cfg.headroom), (plot.height, 0.0)).nice(10);

        let palette = Palette::new(cfg.palette.clone());
        let layers = stacked
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                let label = cfg
                    .overrides
                    .iter()
                    .find(|o| o.code == l.key)
                    .map_or_else(|| l.key.clone(), |o| o.display_name.clone());
                AreaLayer {
                    color: layer_color(&l.key, i, &palette, &cfg.overrides),
                    label,
                    key: l.key,
                    bands: l.bands,
                }
            })
            .collect();
        let legend = Legend::new(
            cfg.overrides
                .iter()
                .map(|o| LegendEntry { label: o.display_name.clone(), color: o.color })
                .collect(),
        );
        let x_axis = Axis::yearly(cfg.x_title.clone(), &x);
        let y_axis = Axis::values(cfg.y_title.clone(), &y, cfg.y_ticks, format::grouped_tick);
        Some(Self { layout, plot, x, y, layers, legend, x_axis, y_axis })
    }

    /// Closed plot-local outline of layer `index`: upper edge forward, lower edge back.
    pub fn polygon(&self, index: usize) -> Vec<(f64, f64)> {
        let Some(layer) = self.layers.get(index) else { return Vec::new() };
        let upper = layer.bands.iter().map(|b| (self.x.to_px(b.timestamp), self.y.to_px(b.upper)));
        let lower = layer.bands.iter().rev().map(|b| (self.x.to_px(b.timestamp), self.y.to_px(b.lower)));
        upper.chain(lower).collect()
    }

    pub fn surface_size(&self) -> (i32, i32) {
        let legend = self.legend.height(self.layout.width as f64).ceil() as i32;
        (self.layout.width, self.layout.height + legend)
    }

    /// Index of the band under plot-local `(local_x, local_y)`, if any.
    pub fn layer_at(&self, local_x: f64, local_y: f64) -> Option<usize> {
        let time = self.x.from_px(local_x);
        let value = self.y.from_px(local_y);
        self.layers.iter().position(|layer| match band_bounds_at(&layer.bands, time) {
            Some((lo, hi)) => value >= lo && value <= hi,
            None => {
                // a single period has no width in time; accept the pixel column it sits on
                layer.bands.len() == 1
                    && (self.x.to_px(layer.bands[0].timestamp) - local_x).abs() <= 1.0
                    && value >= layer.bands[0].lower
                    && value <= layer.bands[0].upper
            }
        })
    }
}

/// Linearly interpolated `(lower, upper)` of a band sequence at `time`; `None` outside it.
pub fn band_bounds_at(bands: &[StackBand], time: f64) -> Option<(f64, f64)> {
    bands.windows(2).find_map(|w| {
        let (a, b) = (date_to_days(w[0].timestamp), date_to_days(w[1].timestamp));
        if time < a || time > b || b <= a {
            return None;
        }
        let f = (time - a) / (b - a);
        let lerp = |p: f64, q: f64| p + (q - p) * f;
        Some((lerp(w[0].lower, w[1].lower), lerp(w[0].upper, w[1].upper)))
    })
}

/// Pointer-driven state for one area chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaInteraction {
    pub hovered: Option<usize>,
    pub tooltip: Tooltip,
}

impl AreaInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a pointer position in surface pixels.
    pub fn pointer_move(&mut self, chart: &AreaChart, pointer: Pointer) -> Option<&AreaLayer> {
        let hit = if chart.plot.contains(pointer) {
            let (lx, ly) = chart.plot.to_local(pointer);
            chart.layer_at(lx, ly)
        } else {
            None
        };
        match hit {
            Some(i) if self.hovered == Some(i) => self.tooltip.move_to(pointer),
            Some(i) => self.tooltip.show_at(pointer, vec![TooltipRow::bold(chart.layers[i].key.clone())]),
            None => self.tooltip.hide(),
        }
        self.hovered = hit;
        hit.map(|i| &chart.layers[i])
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }
}
