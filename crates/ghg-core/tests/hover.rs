// File: crates/ghg-core/tests/hover.rs
// Purpose: Pointer-driven lookups: nearest point per series, focused entity, band hit-testing.

mod common;

use chrono::NaiveDate;
use ghg_core::config::{AreaChartConfig, LineChartConfig, PipelineConfig};
use ghg_core::line_chart::nearest_point;
use ghg_core::scale::date_to_days;
use ghg_core::{load, AreaChart, AreaInteraction, LineChart, LineInteraction, Observation, PathStyle, Pointer};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn point(year: i32, value: f64) -> Observation {
    Observation {
        entity_code: "USA".into(),
        entity_name: "United States".into(),
        period: year,
        timestamp: ymd(year, 1, 1),
        raw_value: value,
        scaled_value: value * 1000.0,
        status: "A".into(),
    }
}

fn sample_charts() -> (LineChart, AreaChart) {
    let loaded = load(&common::source(&common::sample_rows()), &PipelineConfig::default()).expect("load");
    let line = LineChart::new(loaded.series.ready().unwrap(), &LineChartConfig::default()).unwrap();
    let keys = PipelineConfig::default().area_entities;
    let area = AreaChart::new(loaded.records.ready().unwrap(), &keys, &AreaChartConfig::default()).unwrap();
    (line, area)
}

#[test]
fn midpoint_between_two_years_picks_the_later_point() {
    let points = vec![point(2014, 1.0), point(2016, 2.0)];
    // 2015-01-01 is exactly 365 days from both neighbours.
    let mid = date_to_days(ymd(2015, 1, 1));
    assert_eq!(nearest_point(&points, mid).unwrap().period, 2016);
    assert_eq!(nearest_point(&points, mid - 1.0).unwrap().period, 2014);
    assert_eq!(nearest_point(&points, mid + 1.0).unwrap().period, 2016);
}

#[test]
fn lookup_clamps_at_both_ends() {
    let points = vec![point(2014, 1.0), point(2016, 2.0), point(2018, 3.0)];
    assert_eq!(nearest_point(&points, date_to_days(ymd(2000, 1, 1))).unwrap().period, 2014);
    assert_eq!(nearest_point(&points, date_to_days(ymd(2030, 1, 1))).unwrap().period, 2018);
    assert_eq!(nearest_point(&points[..1], date_to_days(ymd(2030, 1, 1))).unwrap().period, 2014);
    assert!(nearest_point(&[], 0.0).is_none());
}

#[test]
fn focused_entity_is_vertically_nearest_to_pointer() {
    let (chart, _) = sample_charts();
    let lx = chart.x.to_px(ymd(2015, 1, 1));
    // Canada sits at 19,800 in 2015; Australia at 22,300.
    let hover = chart.hover_at(lx, chart.y.to_px(20_000.0));
    assert_eq!(hover.focused.as_deref(), Some("Canada"));
    let hover = chart.hover_at(lx, chart.y.to_px(22_100.0));
    assert_eq!(hover.focused.as_deref(), Some("Australia"));

    assert_eq!(hover.closest.len(), 5);
    assert!(hover.closest.windows(2).all(|w| w[0].value >= w[1].value));
    assert!(hover.closest.iter().all(|p| p.timestamp == ymd(2015, 1, 1)));
    approx::assert_abs_diff_eq!(hover.hover_x, lx, epsilon = 1e-9);
}

#[test]
fn tooltip_lists_every_entity_under_a_year_header() {
    let (chart, _) = sample_charts();
    let lx = chart.x.to_px(ymd(2016, 1, 1));
    let rows = chart.hover_at(lx, chart.y.to_px(15_900.0)).tooltip_rows();
    assert_eq!(rows[0].text, "2016");
    assert!(rows[0].bold);
    assert_eq!(rows[1].text, "Australia: 22,500.0");
    let kaz = rows.iter().find(|r| r.text.starts_with("Kazakhstan")).unwrap();
    assert_eq!(kaz.text, "Kazakhstan: 15,900.0");
    assert!(kaz.bold);
    assert_eq!(rows.iter().filter(|r| r.bold).count(), 2);
}

#[test]
fn line_interaction_highlights_focus_and_resets_on_leave() {
    let (chart, _) = sample_charts();
    let mut state = LineInteraction::new(&chart);
    assert!(state.styles.iter().all(|s| *s == PathStyle::Normal));

    let lx = chart.x.to_px(ymd(2015, 1, 1));
    let pointer = Pointer::new(chart.plot.left + lx, chart.plot.top + chart.y.to_px(11_200.0));
    let focused = state.pointer_move(&chart, pointer).and_then(|h| h.focused.clone());
    assert_eq!(focused.as_deref(), Some("Germany"));
    assert!(state.focus_visible);
    assert!(state.tooltip.visible);
    assert_eq!(state.tooltip.x, pointer.x + 15.0);
    assert_eq!(state.tooltip.y, pointer.y - 10.0);
    for (series, style) in chart.series.iter().zip(&state.styles) {
        let want = if series.name == "Germany" { PathStyle::Highlight } else { PathStyle::Faded };
        assert_eq!(*style, want, "{}", series.name);
    }

    state.pointer_leave();
    assert!(!state.focus_visible);
    assert!(!state.tooltip.visible);
    assert!(state.styles.iter().all(|s| *s == PathStyle::Normal));

    // outside the plot behaves like leaving it
    state.pointer_move(&chart, Pointer::new(chart.plot.left + lx, chart.plot.top + 1.0));
    assert!(state.pointer_move(&chart, Pointer::new(1.0, 1.0)).is_none());
    assert!(!state.tooltip.visible);
}

#[test]
fn area_hit_test_finds_the_band_under_the_pointer() {
    let (_, chart) = sample_charts();
    let lx = chart.x.to_px(ymd(2015, 1, 1));
    // 2015 stack: USA 17.0, CAN 19.8, AUS 22.3, KAZ 15.6 (top 74.7)
    assert_eq!(chart.layer_at(lx, chart.y.to_px(8.0)), Some(0));
    assert_eq!(chart.layer_at(lx, chart.y.to_px(30.0)), Some(1));
    assert_eq!(chart.layer_at(lx, chart.y.to_px(50.0)), Some(2));
    assert_eq!(chart.layer_at(lx, chart.y.to_px(70.0)), Some(3));
    assert_eq!(chart.layer_at(lx, chart.y.to_px(76.0)), None);

    // between periods the band edges are interpolated
    let between = (chart.x.to_px(ymd(2015, 1, 1)) + chart.x.to_px(ymd(2016, 1, 1))) / 2.0;
    assert_eq!(chart.layer_at(between, chart.y.to_px(16.5)), Some(0));
}

#[test]
fn area_interaction_shows_entity_code_and_hides_on_leave() {
    let (_, chart) = sample_charts();
    let mut state = AreaInteraction::new();
    let lx = chart.x.to_px(ymd(2016, 1, 1));
    let pointer = Pointer::new(chart.plot.left + lx, chart.plot.top + chart.y.to_px(70.0));
    let layer = state.pointer_move(&chart, pointer).expect("band under pointer");
    assert_eq!(layer.key, "KAZ");
    assert_eq!(state.tooltip.rows.len(), 1);
    assert_eq!(state.tooltip.rows[0].text, "KAZ");
    assert!(state.tooltip.rows[0].bold);
    assert!(state.tooltip.visible);

    let moved = Pointer::new(pointer.x + 2.0, pointer.y);
    state.pointer_move(&chart, moved);
    assert_eq!(state.tooltip.x, moved.x + 15.0);

    state.pointer_leave();
    assert!(!state.tooltip.visible);
    assert_eq!(state.hovered, None);
}

#[test]
fn area_colors_and_legend_follow_overrides() {
    let (_, chart) = sample_charts();
    let usa = chart.layers.iter().find(|l| l.key == "USA").unwrap();
    assert_eq!(usa.color.to_string(), "#4e79a7");
    assert_eq!(usa.label, "United States");
    let labels: Vec<&str> = chart.legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Kazakhstan", "Australia", "Canada", "United States"]);
}
