// File: crates/ghg-core/tests/pipeline.rs
// Purpose: End-to-end pipeline behavior: selection filters, both views, degradation paths.

mod common;

use common::{row, source};
use ghg_core::config::PipelineConfig;
use ghg_core::{load, Config, FileSource, PipelineError, ViewData};

#[test]
fn filters_year_range_measure_unit_and_empty_code() {
    let rows = vec![
        row("USA", "United States", "2013", "1.0"),
        row("USA", "United States", "2014", "2.0"),
        row("USA", "United States", "2021", "3.0"),
        row("USA", "United States", "2022", "4.0"),
        row("", "Nowhere", "2015", "5.0"),
        "DATAFLOW,USA,United States,CO2,KG_CO2E_PS,2015,6.0,A".to_string(),
        "DATAFLOW,USA,United States,_T,T_CO2E,2015,7.0,A".to_string(),
    ];
    let loaded = load(&source(&rows), &PipelineConfig::default()).expect("load");
    assert_eq!(loaded.stats.rows_read, 7);
    assert_eq!(loaded.stats.rows_kept, 2);

    let set = loaded.series.ready().expect("comparative view");
    let years: Vec<i32> = set.get("United States").unwrap().iter().map(|o| o.period).collect();
    assert_eq!(years, vec![2014, 2021]);
}

#[test]
fn scales_values_and_defaults_non_numeric_to_zero() {
    let rows = vec![
        row("CAN", "Canada", "2016", "19.25"),
        row("CAN", "Canada", "2017", "n/a"),
        row("CAN", "Canada", "2018", ""),
    ];
    let loaded = load(&source(&rows), &PipelineConfig::default()).expect("load");
    assert_eq!(loaded.stats.values_defaulted, 2);

    let set = loaded.series.ready().unwrap();
    let points = set.get("Canada").unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].raw_value, 19.25);
    assert_eq!(points[0].scaled_value, 19_250.0);
    assert_eq!(points[1].raw_value, 0.0);
    assert_eq!(points[2].scaled_value, 0.0);
}

#[test]
fn unparseable_period_drops_the_row() {
    let rows = vec![
        row("USA", "United States", "2015-Q1", "1.0"),
        row("USA", "United States", "abc", "1.0"),
        row("USA", "United States", "99999", "1.0"),
        row("USA", "United States", "2015", "2.0"),
    ];
    let loaded = load(&source(&rows), &PipelineConfig::default()).expect("load");
    assert_eq!(loaded.stats.rows_bad_period, 1);
    assert_eq!(loaded.series.ready().unwrap().get("United States").unwrap().len(), 1);
}

#[test]
fn single_stacked_entity_pivots_with_zero_fill() {
    let loaded = load(&source(&[row("USA", "United States", "2015", "17.0")]), &PipelineConfig::default())
        .expect("load");
    let records = loaded.records.ready().expect("cumulative view");
    assert_eq!(records.len(), 1);
    let rec = &records[0];
    assert_eq!(rec.period, 2015);
    let codes: Vec<&str> = rec.values.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["USA", "CAN", "AUS", "KAZ"]);
    assert_eq!(rec.value("USA"), Some(17.0));
    assert_eq!(rec.value("CAN"), Some(0.0));
    assert_eq!(rec.value("AUS"), Some(0.0));
    assert_eq!(rec.value("KAZ"), Some(0.0));
}

#[test]
fn series_come_out_sorted_for_shuffled_input() {
    let rows = vec![
        row("JPN", "Japan", "2019", "9.0"),
        row("JPN", "Japan", "2014", "10.0"),
        row("JPN", "Japan", "2017", "9.5"),
        row("JPN", "Japan", "2015", "9.9"),
    ];
    let loaded = load(&source(&rows), &PipelineConfig::default()).expect("load");
    let points = loaded.series.ready().unwrap().get("Japan").unwrap();
    assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn selection_without_matches_is_no_data() {
    // DEU is only in the comparative allow-list.
    let loaded = load(&source(&[row("DEU", "Germany", "2015", "11.0")]), &PipelineConfig::default())
        .expect("load");
    assert!(loaded.series.ready().is_some());
    assert!(loaded.records.is_no_data());

    let empty = load(&source(&[]), &PipelineConfig::default()).expect("load");
    assert_eq!(empty.series, ViewData::NoData);
    assert_eq!(empty.records, ViewData::NoData);
}

#[test]
fn identical_input_yields_identical_views() {
    let rows = common::sample_rows();
    let cfg = PipelineConfig::default();
    let a = load(&source(&rows), &cfg).expect("first load");
    let b = load(&source(&rows), &cfg).expect("second load");
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_a_fetch_error_naming_the_resource() {
    let err = load(&FileSource::new("does/not/exist.csv"), &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Fetch { .. }));
    assert_eq!(err.resource(), "does/not/exist.csv");
    let banner = Config::default().messages.load_failure(err.resource());
    assert_eq!(banner, "Failed to load data from does/not/exist.csv. Please check file path and server.");
}

#[test]
fn missing_required_column_is_fatal() {
    let text = "REF_AREA,MEASURE,UNIT_MEASURE,TIME_PERIOD\nUSA,_T,KG_CO2E_PS,2015\n";
    let err = load(&ghg_core::InlineSource::new("broken.csv", text), &PipelineConfig::default()).unwrap_err();
    match err {
        PipelineError::MissingColumn { column, .. } => assert_eq!(column, "OBS_VALUE"),
        other => panic!("unexpected error: {other}"),
    }
}
