// File: crates/ghg-core/src/observation.rs
// Summary: Strongly-typed observation and the parse-and-validate step that produces it from CSV rows.
// Notes:
// - Required columns: period, entity code, measure, unit, value. Name and status are optional.
// - Fallbacks: non-numeric value -> 0.0, empty name -> entity code, missing status -> "".
// - A row whose period is not a year string never becomes an Observation.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::config::{ColumnNames, PipelineConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub entity_code: String,
    pub entity_name: String,
    pub period: i32,
    /// January 1st of `period`.
    pub timestamp: NaiveDate,
    pub raw_value: f64,
    /// `raw_value` in display units.
    pub scaled_value: f64,
    pub status: String,
}

/// Header positions resolved once per resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnIndex {
    period: usize,
    entity_code: usize,
    entity_name: Option<usize>,
    measure: usize,
    unit: usize,
    value: usize,
    status: Option<usize>,
}

impl ColumnIndex {
    /// Locate every configured column; `Err` carries the first missing required name.
    pub fn resolve(headers: &StringRecord, names: &ColumnNames) -> Result<Self, String> {
        let find = |want: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == want)
        };
        let require = |want: &String| find(want).ok_or_else(|| want.clone());
        Ok(Self {
            period: require(&names.period)?,
            entity_code: require(&names.entity_code)?,
            entity_name: find(&names.entity_name),
            measure: require(&names.measure)?,
            unit: require(&names.unit)?,
            value: require(&names.value)?,
            status: find(&names.status),
        })
    }

    pub fn row<'r>(&self, record: &'r StringRecord) -> RawRow<'r> {
        let get = |i: usize| record.get(i).unwrap_or("");
        RawRow {
            period: get(self.period),
            entity_code: get(self.entity_code),
            entity_name: self.entity_name.map(get).unwrap_or(""),
            measure: get(self.measure),
            unit: get(self.unit),
            value: get(self.value),
            status: self.status.map(get).unwrap_or(""),
        }
    }
}

/// One CSV row viewed through the configured columns, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRow<'r> {
    pub period: &'r str,
    pub entity_code: &'r str,
    pub entity_name: &'r str,
    pub measure: &'r str,
    pub unit: &'r str,
    pub value: &'r str,
    pub status: &'r str,
}

/// Result of checking a row against the selection.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOutcome {
    Kept(Observation),
    /// Fails the year range, measure, unit or entity-code filter.
    Filtered,
    /// Matches the selection and starts with an in-range year, but the period is not a plain year.
    BadPeriod,
}

impl<'r> RawRow<'r> {
    fn selected(&self, cfg: &PipelineConfig) -> bool {
        self.measure.trim() == cfg.measure
            && self.unit.trim() == cfg.unit
            && !self.entity_code.trim().is_empty()
    }

    /// Apply the selection filter, then validate into an `Observation`.
    pub fn validate(&self, cfg: &PipelineConfig) -> RowOutcome {
        if !self.selected(cfg) {
            return RowOutcome::Filtered;
        }
        let Some(period) = parse_period(self.period) else {
            // only a period that starts with an in-range year is worth reporting
            return match leading_year(self.period) {
                Some(year) if (cfg.start_year..=cfg.end_year).contains(&year) => RowOutcome::BadPeriod,
                _ => RowOutcome::Filtered,
            };
        };
        if period < cfg.start_year || period > cfg.end_year {
            return RowOutcome::Filtered;
        }
        let Some(timestamp) = NaiveDate::from_ymd_opt(period, 1, 1) else {
            return RowOutcome::BadPeriod;
        };
        let raw_value = parse_value(self.value).unwrap_or(0.0);
        let code = self.entity_code.trim();
        let name = match self.entity_name.trim() {
            "" => code,
            n => n,
        };
        RowOutcome::Kept(Observation {
            entity_code: code.to_string(),
            entity_name: name.to_string(),
            period,
            timestamp,
            raw_value,
            scaled_value: raw_value * cfg.display_scale,
            status: self.status.trim().to_string(),
        })
    }
}

/// Parse a 1-4 digit year string.
pub fn parse_period(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Year prefix of a malformed period such as `2015-Q1`.
fn leading_year(s: &str) -> Option<i32> {
    let s = s.trim();
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || digits > 4 {
        return None;
    }
    s[..digits].parse().ok()
}

/// Parse a finite float; `None` for empty, non-numeric or non-finite input.
pub fn parse_value(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(period: &'a str, value: &'a str) -> RawRow<'a> {
        RawRow {
            period,
            entity_code: "USA",
            entity_name: "United States",
            measure: "_T",
            unit: "KG_CO2E_PS",
            value,
            status: "A",
        }
    }

    #[test]
    fn periods() {
        assert_eq!(parse_period("2015"), Some(2015));
        assert_eq!(parse_period(" 2015 "), Some(2015));
        assert_eq!(parse_period("2015-Q1"), None);
        assert_eq!(parse_period("20155"), None);
        assert_eq!(parse_period(""), None);
    }

    #[test]
    fn non_numeric_value_defaults_to_zero() {
        let cfg = PipelineConfig::default();
        let RowOutcome::Kept(obs) = row("2015", "n/a").validate(&cfg) else { panic!("row dropped") };
        assert_eq!(obs.raw_value, 0.0);
        assert_eq!(obs.scaled_value, 0.0);
        let RowOutcome::Kept(obs) = row("2015", "15.5").validate(&cfg) else { panic!("row dropped") };
        assert_eq!(obs.scaled_value, 15_500.0);
        assert_eq!(obs.timestamp, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
    }

    #[test]
    fn out_of_range_and_bad_periods() {
        let cfg = PipelineConfig::default();
        assert_eq!(row("2013", "1").validate(&cfg), RowOutcome::Filtered);
        assert_eq!(row("2022", "1").validate(&cfg), RowOutcome::Filtered);
        assert_eq!(row("2015-Q1", "1").validate(&cfg), RowOutcome::BadPeriod);
        // no usable year prefix: filtered out like any other out-of-range row
        assert_eq!(row("abc", "1").validate(&cfg), RowOutcome::Filtered);
        assert_eq!(row("99999", "1").validate(&cfg), RowOutcome::Filtered);
        assert_eq!(row("1990-Q1", "1").validate(&cfg), RowOutcome::Filtered);
        let mut other = row("2015", "1");
        other.unit = "T_CO2E";
        assert_eq!(other.validate(&cfg), RowOutcome::Filtered);
        other = row("2015", "1");
        other.entity_code = " ";
        assert_eq!(other.validate(&cfg), RowOutcome::Filtered);
    }

    #[test]
    fn empty_name_falls_back_to_code() {
        let cfg = PipelineConfig::default();
        let mut r = row("2016", "2");
        r.entity_name = "";
        let RowOutcome::Kept(obs) = r.validate(&cfg) else { panic!("row dropped") };
        assert_eq!(obs.entity_name, "USA");
    }

    #[test]
    fn resolves_headers_and_reports_missing() {
        let names = ColumnNames::default();
        let headers = StringRecord::from(vec![
            "\u{feff}TIME_PERIOD", "REF_AREA", "MEASURE", "UNIT_MEASURE", "OBS_VALUE",
        ]);
        let idx = ColumnIndex::resolve(&headers, &names).unwrap();
        let rec = StringRecord::from(vec!["2015", "CAN", "_T", "KG_CO2E_PS", "19.6"]);
        let raw = idx.row(&rec);
        assert_eq!(raw.entity_name, "");
        assert_eq!(raw.value, "19.6");

        let missing = StringRecord::from(vec!["TIME_PERIOD", "REF_AREA"]);
        assert_eq!(ColumnIndex::resolve(&missing, &names), Err("MEASURE".to_string()));
    }
}
