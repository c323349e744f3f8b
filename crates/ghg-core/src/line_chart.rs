// File: crates/ghg-core/src/line_chart.rs
// Summary: Comparative multi-line chart: scales, colors, paths, legend and pointer interaction state.
// Notes:
// - Everything here is renderer-agnostic; `render::line` paints it with Skia.
// - Hover lookup is a pure function of plot-local pointer coordinates (`LineChart::hover_at`).
//   `LineInteraction` owns the mutable state (tooltip, path styles) derived from it.

use chrono::NaiveDate;

use crate::axis::Axis;
use crate::config::LineChartConfig;
use crate::format;
use crate::geometry::{PlotArea, Pointer};
use crate::legend::{Legend, LegendEntry};
use crate::observation::Observation;
use crate::scale::{date_to_days, days_to_date, LinearScale, TimeScale};
use crate::theme::{Palette, Rgb};
use crate::tooltip::{Tooltip, TooltipRow};
use crate::types::ChartLayout;
use crate::views::EntitySeriesSet;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<Observation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStyle {
    Normal,
    Highlight,
    Faded,
}

/// One entity's observation nearest to the hovered time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosestPoint {
    pub entity: String,
    pub value: f64,
    pub timestamp: NaiveDate,
    pub color: Rgb,
}

/// Result of a hover lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct LineHover {
    /// Hovered time as a day number.
    pub time: f64,
    /// Closest point per entity, descending by value.
    pub closest: Vec<ClosestPoint>,
    /// Entity whose closest value is vertically nearest the pointer.
    pub focused: Option<String>,
    /// Plot-local x of the hover line.
    pub hover_x: f64,
}

impl LineHover {
    pub fn tooltip_rows(&self) -> Vec<TooltipRow> {
        // nearest whole day, so a pointer exactly on Jan 1st never reads as the previous year
        let header = days_to_date(self.time.round()).map(format::year).unwrap_or_default();
        let mut rows = vec![TooltipRow::bold(header)];
        rows.extend(self.closest.iter().map(|p| {
            let focused = self.focused.as_deref() == Some(p.entity.as_str());
            TooltipRow::colored(format!("{}: {}", p.entity, format::grouped_1dp(p.value)), p.color, focused)
        }));
        rows
    }
}

#[derive(Clone, Debug)]
pub struct LineChart {
    pub layout: ChartLayout,
    pub plot: PlotArea,
    pub x: TimeScale,
    pub y: LinearScale,
    pub series: Vec<LineSeries>,
    pub legend: Legend,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl LineChart {
    /// Build the chart; `None` when `set` is empty.
    pub fn new(set: &EntitySeriesSet, cfg: &LineChartConfig) -> Option<Self> {
        let (t0, t1) = set.time_extent()?;
        let layout = cfg.layout;
        let plot = PlotArea::from_layout(&layout);
        let x = TimeScale::new((t0, t1), (0.0, plot.width));
        let y = LinearScale::new((0.0, set.max_scaled() * cfg.headroom), (plot.height, 0.0)).nice(10);

        let palette = Palette::new(cfg.palette.clone());
        let series: Vec<LineSeries> = set
            .iter()
            .enumerate()
            .map(|(i, (name, points))| LineSeries {
                name: name.to_string(),
                color: palette.color(i),
                points: points.to_vec(),
            })
            .collect();
        let legend = Legend::new(
            series
                .iter()
                .map(|s| LegendEntry { label: s.name.clone(), color: s.color })
                .collect(),
        );
        let x_axis = Axis::yearly(cfg.x_title.clone(), &x);
        let y_axis = Axis::values(cfg.y_title.clone(), &y, cfg.y_ticks, |v| format::si(v, 2));
        Some(Self { layout, plot, x, y, series, legend, x_axis, y_axis })
    }

    /// Plot-local vertices of series `index`, in time order.
    pub fn path_points(&self, index: usize) -> Vec<(f64, f64)> {
        self.series
            .get(index)
            .map(|s| {
                s.points
                    .iter()
                    .map(|o| (self.x.to_px(o.timestamp), self.y.to_px(o.scaled_value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Surface size including the legend strip below the chart.
    pub fn surface_size(&self) -> (i32, i32) {
        let legend = self.legend.height(self.layout.width as f64).ceil() as i32;
        (self.layout.width, self.layout.height + legend)
    }

    /// Nearest-point lookup at plot-local `(local_x, local_y)`.
    pub fn hover_at(&self, local_x: f64, local_y: f64) -> LineHover {
        let time = self.x.from_px(local_x);
        let mut closest: Vec<ClosestPoint> = self
            .series
            .iter()
            .filter_map(|s| {
                nearest_point(&s.points, time).map(|o| ClosestPoint {
                    entity: s.name.clone(),
                    value: o.scaled_value,
                    timestamp: o.timestamp,
                    color: s.color,
                })
            })
            .collect();
        closest.sort_by(|a, b| b.value.total_cmp(&a.value));

        let target = self.y.from_px(local_y);
        let mut focused: Option<&ClosestPoint> = None;
        let mut min_dist = f64::INFINITY;
        for p in &closest {
            let dist = (p.value - target).abs();
            if dist < min_dist {
                min_dist = dist;
                focused = Some(p);
            }
        }
        let focused = focused.map(|p| p.entity.clone());
        let hover_x = closest.first().map_or(local_x, |p| self.x.to_px(p.timestamp));
        LineHover { time, closest, focused, hover_x }
    }
}

/// First index in `lo..points.len()` whose timestamp is not before `time`; `points.len()` if none.
pub fn bisect_left(points: &[Observation], time: f64, lo: usize) -> usize {
    let (mut lo, mut hi) = (lo.min(points.len()), points.len());
    while lo < hi {
        let mid = (lo + hi) / 2;
        if date_to_days(points[mid].timestamp) < time {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Of the two observations bracketing `time`, the one closer to it. Ties pick the later
/// point; before the first or after the last observation the endpoint is returned.
pub fn nearest_point(points: &[Observation], time: f64) -> Option<&Observation> {
    let first = points.first()?;
    let i = bisect_left(points, time, 1);
    let d0 = points.get(i - 1).unwrap_or(first);
    match points.get(i) {
        Some(d1) if time - date_to_days(d0.timestamp) >= date_to_days(d1.timestamp) - time => Some(d1),
        _ => Some(d0),
    }
}

/// Pointer-driven state for one line chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineInteraction {
    pub hover: Option<LineHover>,
    pub tooltip: Tooltip,
    pub styles: Vec<PathStyle>,
    /// Hover line shown while the pointer is over the plot.
    pub focus_visible: bool,
}

impl LineInteraction {
    pub fn new(chart: &LineChart) -> Self {
        Self { styles: vec![PathStyle::Normal; chart.series.len()], ..Self::default() }
    }

    pub fn pointer_enter(&mut self) {
        self.focus_visible = true;
        self.tooltip.visible = true;
        self.styles.iter_mut().for_each(|s| *s = PathStyle::Faded);
    }

    /// Update from a pointer position in surface pixels. Leaving the plot behaves like
    /// `pointer_leave`.
    pub fn pointer_move(&mut self, chart: &LineChart, pointer: Pointer) -> Option<&LineHover> {
        if !chart.plot.contains(pointer) {
            self.pointer_leave();
            return None;
        }
        if !self.focus_visible {
            self.pointer_enter();
        }
        let (lx, ly) = chart.plot.to_local(pointer);
        let hover = chart.hover_at(lx, ly);
        self.styles = chart
            .series
            .iter()
            .map(|s| {
                if hover.focused.as_deref() == Some(s.name.as_str()) {
                    PathStyle::Highlight
                } else {
                    PathStyle::Faded
                }
            })
            .collect();
        self.tooltip.show_at(pointer, hover.tooltip_rows());
        self.hover = Some(hover);
        self.hover.as_ref()
    }

    pub fn pointer_leave(&mut self) {
        self.focus_visible = false;
        self.tooltip.hide();
        self.hover = None;
        self.styles.iter_mut().for_each(|s| *s = PathStyle::Normal);
    }
}
