// File: crates/ghg-core/src/pipeline.rs
// Summary: Load -> filter -> validate -> group/pivot. Produces both derived views from one base set.

use tracing::{debug, error, info, warn};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::observation::{ColumnIndex, Observation, RowOutcome};
use crate::source::DataSource;
use crate::views::{EntitySeriesSet, PeriodRecord};

/// A derived view, or the "no data for selection" condition.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewData<T> {
    Ready(T),
    NoData,
}

impl<T> ViewData<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            Self::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Row accounting for one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Selected rows whose period starts with an in-range year but is not a plain year.
    pub rows_bad_period: usize,
    pub values_defaulted: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedViews {
    pub series: ViewData<EntitySeriesSet>,
    pub records: ViewData<Vec<PeriodRecord>>,
    pub stats: LoadStats,
}

/// Fetch, parse and reshape `source`. Fetch and parse failures are fatal and not retried.
pub fn load(source: &dyn DataSource, cfg: &PipelineConfig) -> PipelineResult<LoadedViews> {
    let resource = source.name();
    let result = fetch_observations(source, &resource, cfg).map(|(observations, stats)| {
        let views = derive_views(&observations, cfg, stats);
        info!(
            resource = %resource,
            rows = stats.rows_read,
            kept = stats.rows_kept,
            bad_period = stats.rows_bad_period,
            defaulted = stats.values_defaulted,
            "loaded emissions data"
        );
        views
    });
    if let Err(e) = &result {
        error!(resource = %resource, error = %e, "error loading or processing data");
    }
    result
}

/// Parse `source` into validated observations, in input order.
pub fn fetch_observations(
    source: &dyn DataSource,
    resource: &str,
    cfg: &PipelineConfig,
) -> PipelineResult<(Vec<Observation>, LoadStats)> {
    let bytes = source
        .fetch()
        .map_err(|e| PipelineError::Fetch { resource: resource.to_string(), source: e })?;
    let parse_err = |e: csv::Error| PipelineError::Parse { resource: resource.to_string(), source: e };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());
    let headers = rdr.headers().map_err(parse_err)?.clone();
    let columns = ColumnIndex::resolve(&headers, &cfg.columns).map_err(|column| {
        PipelineError::MissingColumn { resource: resource.to_string(), column }
    })?;
    debug!(?columns, "resolved columns");

    let mut stats = LoadStats::default();
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(parse_err)?;
        stats.rows_read += 1;
        let raw = columns.row(&rec);
        match raw.validate(cfg) {
            RowOutcome::Kept(obs) => {
                if crate::observation::parse_value(raw.value).is_none() {
                    stats.values_defaulted += 1;
                }
                stats.rows_kept += 1;
                out.push(obs);
            }
            RowOutcome::BadPeriod => {
                stats.rows_bad_period += 1;
                warn!(period = raw.period, entity = raw.entity_code, "dropping row with unparseable period");
            }
            RowOutcome::Filtered => {}
        }
    }
    Ok((out, stats))
}

/// Build both views from the filtered base set. Empty views become `NoData`.
pub fn derive_views(observations: &[Observation], cfg: &PipelineConfig, stats: LoadStats) -> LoadedViews {
    let set = EntitySeriesSet::build(observations, &cfg.line_entities);
    let series = if set.is_empty() {
        warn!("no data found for the comparative selection");
        ViewData::NoData
    } else {
        ViewData::Ready(set)
    };

    let pivot = PeriodRecord::pivot(observations, &cfg.area_entities);
    let records = if pivot.is_empty() {
        warn!("no data found for the cumulative selection");
        ViewData::NoData
    } else {
        ViewData::Ready(pivot)
    };

    LoadedViews { series, records, stats }
}
