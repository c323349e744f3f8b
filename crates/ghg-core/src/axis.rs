// File: crates/ghg-core/src/axis.rs
// Summary: Axis model with a title and pre-positioned tick labels.

use crate::format;
use crate::scale::{LinearScale, TimeScale};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis in plot-local pixels.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis with one tick per calendar year.
    pub fn yearly(title: impl Into<String>, x: &TimeScale) -> Self {
        let ticks = x
            .year_ticks()
            .into_iter()
            .map(|d| Tick { offset: x.to_px(d), label: format::year(d) })
            .collect();
        Self { title: title.into(), ticks }
    }

    /// Left axis with roughly `count` ticks labelled by `label`.
    pub fn values(title: impl Into<String>, y: &LinearScale, count: usize, label: impl Fn(f64) -> String) -> Self {
        let ticks = y
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: y.to_px(v), label: label(v) })
            .collect();
        Self { title: title.into(), ticks }
    }
}
