// File: crates/ghg-core/src/views.rs
// Summary: The two derived views: per-entity ordered series and the per-period pivot.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::observation::Observation;

/// Per-entity series for the comparative view, keyed and iterated by entity name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntitySeriesSet {
    series: BTreeMap<String, Vec<Observation>>,
}

impl EntitySeriesSet {
    /// Group `observations` by entity name, keeping entities whose code is in `allow`.
    /// Each series is sorted ascending by timestamp (stable, input order on ties).
    pub fn build(observations: &[Observation], allow: &[String]) -> Self {
        let mut series: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
        for obs in observations.iter().filter(|o| allow.contains(&o.entity_code)) {
            series.entry(obs.entity_name.clone()).or_default().push(obs.clone());
        }
        for points in series.values_mut() {
            points.sort_by_key(|o| o.timestamp);
        }
        Self { series }
    }

    pub fn len(&self) -> usize { self.series.len() }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn get(&self, name: &str) -> Option<&[Observation]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Observation])> + '_ {
        self.series.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Earliest and latest timestamp over every series.
    pub fn time_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut all = self.series.values().flatten().map(|o| o.timestamp);
        let first = all.next()?;
        Some(all.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    pub fn max_scaled(&self) -> f64 {
        self.series
            .values()
            .flatten()
            .map(|o| o.scaled_value)
            .fold(0.0, f64::max)
    }
}

/// One entity's value inside a `PeriodRecord`.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityValue {
    pub code: String,
    pub value: f64,
}

/// Wide row of the cumulative view: one value per stacked entity for a single period.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodRecord {
    pub period: i32,
    pub timestamp: NaiveDate,
    /// Exactly one entry per stacked entity, in stack order.
    pub values: Vec<EntityValue>,
}

impl PeriodRecord {
    /// Pivot observations of the `keys` entities into one record per period, ascending.
    /// Entities without an observation in a period get 0; the first observation wins
    /// when an entity repeats within a period.
    pub fn pivot(observations: &[Observation], keys: &[String]) -> Vec<Self> {
        let mut by_period: BTreeMap<i32, Vec<&Observation>> = BTreeMap::new();
        for obs in observations.iter().filter(|o| keys.contains(&o.entity_code)) {
            by_period.entry(obs.period).or_default().push(obs);
        }
        let mut records: Vec<Self> = by_period
            .into_iter()
            .map(|(period, group)| {
                let values = keys
                    .iter()
                    .map(|code| EntityValue {
                        code: code.clone(),
                        value: group
                            .iter()
                            .find(|o| &o.entity_code == code)
                            .map_or(0.0, |o| o.raw_value),
                    })
                    .collect();
                Self { period, timestamp: group[0].timestamp, values }
            })
            .collect();
        records.sort_by_key(|r| r.timestamp);
        records
    }

    pub fn value(&self, code: &str) -> Option<f64> {
        self.values.iter().find(|v| v.code == code).map(|v| v.value)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().map(|v| v.value).sum()
    }
}
