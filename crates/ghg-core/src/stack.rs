// File: crates/ghg-core/src/stack.rs
// Summary: Zero-baselined additive stacking of period records (no normalization).

use chrono::NaiveDate;

use crate::views::PeriodRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackBand {
    pub timestamp: NaiveDate,
    pub lower: f64,
    pub upper: f64,
}

/// One entity's band across all periods.
#[derive(Clone, Debug, PartialEq)]
pub struct StackLayer {
    pub key: String,
    pub bands: Vec<StackBand>,
}

/// Layer `i` spans `[sum of keys before i, sum through i]` in every period.
/// `keys` is bottom-to-top order; absent values count as 0.
pub fn stack(records: &[PeriodRecord], keys: &[String]) -> Vec<StackLayer> {
    let mut layers: Vec<StackLayer> = keys
        .iter()
        .map(|k| StackLayer { key: k.clone(), bands: Vec::with_capacity(records.len()) })
        .collect();
    for rec in records {
        let mut running = 0.0;
        for layer in layers.iter_mut() {
            let v = rec.value(&layer.key).unwrap_or(0.0);
            let lower = running;
            running += v;
            layer.bands.push(StackBand { timestamp: rec.timestamp, lower, upper: running });
        }
    }
    layers
}

/// Largest top-of-stack value across all periods (0 when empty).
pub fn max_top(layers: &[StackLayer]) -> f64 {
    layers
        .iter()
        .flat_map(|l| l.bands.iter())
        .map(|b| b.upper)
        .fold(0.0, f64::max)
}
