// File: crates/ghg-core/src/config.rs
// Summary: Explicit configuration passed into the pipeline and both chart renderers.
// Notes:
// - Every struct uses `#[serde(default)]`, so a JSON file only needs the keys it overrides.
// - Defaults reproduce the OECD air-emissions dataset layout and the published views.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::render::RenderOptions;
use crate::theme::{self, tableau10_colors, Rgb};
use crate::types::ChartLayout;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub line: LineChartConfig,
    pub area: AreaChartConfig,
    pub messages: Messages,
    /// Theme preset name (`light` or `dark`); anything else renders light.
    pub theme: String,
}

impl Config {
    /// Render options for the configured theme, labels and legend on.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { theme: theme::find(&self.theme), ..RenderOptions::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pipeline;
        if p.start_year > p.end_year {
            return Err(ConfigError::YearRange { start: p.start_year, end: p.end_year });
        }
        Ok(())
    }
}

/// Source column names. Fixed per dataset, never negotiated at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub period: String,
    pub entity_code: String,
    pub entity_name: String,
    pub measure: String,
    pub unit: String,
    pub value: String,
    pub status: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            period: "TIME_PERIOD".into(),
            entity_code: "REF_AREA".into(),
            entity_name: "Reference area".into(),
            measure: "MEASURE".into(),
            unit: "UNIT_MEASURE".into(),
            value: "OBS_VALUE".into(),
            status: "OBS_STATUS".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Inclusive year range.
    pub start_year: i32,
    pub end_year: i32,
    pub measure: String,
    pub unit: String,
    /// Multiplier from source units to display units (tonnes to kg).
    pub display_scale: f64,
    pub columns: ColumnNames,
    /// Allow-list A: entity codes shown in the comparative line view.
    pub line_entities: Vec<String>,
    /// Allow-list B: entity codes of the cumulative view, bottom-to-top stack order.
    pub area_entities: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let codes = |list: &[&str]| list.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        Self {
            start_year: 2014,
            end_year: 2021,
            measure: "_T".into(),
            unit: "KG_CO2E_PS".into(),
            display_scale: 1000.0,
            columns: ColumnNames::default(),
            line_entities: codes(&[
                "USA", "CAN", "AUS", "DEU", "FRA", "GBR", "JPN", "KOR", "CHE", "CHL", "MEX", "CRI",
                "KAZ",
            ]),
            area_entities: codes(&["USA", "CAN", "AUS", "KAZ"]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub layout: ChartLayout,
    pub x_title: String,
    pub y_title: String,
    /// Vertical headroom above the largest value.
    pub headroom: f64,
    pub y_ticks: usize,
    pub palette: Vec<Rgb>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::line_default(),
            x_title: "Year".into(),
            y_title: "Kg CO2e per Person".into(),
            headroom: 1.05,
            y_ticks: 5,
            palette: tableau10_colors(),
        }
    }
}

/// Fixed color (and legend name) for one entity of the cumulative view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ColorOverride {
    pub code: String,
    pub display_name: String,
    pub color: Rgb,
}

impl ColorOverride {
    fn new(code: &str, display_name: &str, color: Rgb) -> Self {
        Self { code: code.into(), display_name: display_name.into(), color }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AreaChartConfig {
    pub layout: ChartLayout,
    pub x_title: String,
    pub y_title: String,
    pub headroom: f64,
    pub y_ticks: usize,
    pub palette: Vec<Rgb>,
    /// Listed in legend order.
    pub overrides: Vec<ColorOverride>,
}

impl Default for AreaChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::area_default(),
            x_title: "Year".into(),
            y_title: "Cumulative Emission Index".into(),
            headroom: 1.05,
            y_ticks: 5,
            palette: tableau10_colors(),
            overrides: vec![
                ColorOverride::new("KAZ", "Kazakhstan", Rgb::new(0x76, 0xb7, 0xb2)),
                ColorOverride::new("AUS", "Australia", Rgb::new(0xf2, 0x8e, 0x2b)),
                ColorOverride::new("CAN", "Canada", Rgb::new(0xe1, 0x57, 0x59)),
                ColorOverride::new("USA", "United States", Rgb::new(0x4e, 0x79, 0xa7)),
            ],
        }
    }
}

/// User-visible degradation messages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// `{resource}` is replaced by the resource name.
    pub load_failure: String,
    pub no_data_comparative: String,
    pub no_data_cumulative: String,
}

impl Messages {
    pub fn load_failure(&self, resource: &str) -> String {
        self.load_failure.replace("{resource}", resource)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_failure: "Failed to load data from {resource}. Please check file path and server.".into(),
            no_data_comparative: "Error: No data available for the comparative selection.".into(),
            no_data_cumulative: "Error: No data available for the cumulative selection.".into(),
        }
    }
}
