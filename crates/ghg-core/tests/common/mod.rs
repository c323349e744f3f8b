// File: crates/ghg-core/tests/common/mod.rs
// Purpose: Shared CSV fixtures for the integration tests.

#![allow(dead_code)]

use ghg_core::InlineSource;

pub const HEADER: &str = "STRUCTURE,REF_AREA,Reference area,MEASURE,UNIT_MEASURE,TIME_PERIOD,OBS_VALUE,OBS_STATUS";

/// A row that passes the default measure/unit selection.
pub fn row(code: &str, name: &str, period: &str, value: &str) -> String {
    format!("DATAFLOW,{code},{name},_T,KG_CO2E_PS,{period},{value},A")
}

pub fn csv(rows: &[String]) -> String {
    let mut text = String::from(HEADER);
    for r in rows {
        text.push('\n');
        text.push_str(r);
    }
    text.push('\n');
    text
}

pub fn source(rows: &[String]) -> InlineSource {
    InlineSource::new("inline.csv", csv(rows))
}

/// Small dataset covering both views: three line entities and all four stacked ones.
pub fn sample_rows() -> Vec<String> {
    let mut rows = Vec::new();
    for (year, usa, can, aus, kaz, deu) in [
        ("2014", "17.5", "20.1", "22.0", "15.2", "11.4"),
        ("2015", "17.0", "19.8", "22.3", "15.6", "11.2"),
        ("2016", "16.6", "19.4", "22.5", "15.9", "11.1"),
        ("2017", "16.4", "19.6", "22.4", "16.3", "10.8"),
    ] {
        rows.push(row("USA", "United States", year, usa));
        rows.push(row("CAN", "Canada", year, can));
        rows.push(row("AUS", "Australia", year, aus));
        rows.push(row("KAZ", "Kazakhstan", year, kaz));
        rows.push(row("DEU", "Germany", year, deu));
    }
    rows
}
