// File: crates/ghg-core/src/lib.rs
// Summary: Core library entry point; data pipeline, chart models, rendering and host page.

pub mod error;
pub mod config;
pub mod source;
pub mod observation;
pub mod views;
pub mod pipeline;
pub mod stack;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod axis;
pub mod format;
pub mod theme;
pub mod legend;
pub mod tooltip;
pub mod line_chart;
pub mod area_chart;
pub mod text;
pub mod render;
pub mod page;
pub mod report;
pub mod telemetry;

pub use config::{AreaChartConfig, ColorOverride, Config, LineChartConfig, Messages, PipelineConfig};
pub use error::{ConfigError, PipelineError, RenderError};
pub use source::{DataSource, FileSource, InlineSource};
pub use observation::Observation;
pub use views::{EntitySeriesSet, EntityValue, PeriodRecord};
pub use pipeline::{load, LoadStats, LoadedViews, ViewData};
pub use stack::{stack, StackBand, StackLayer};
pub use geometry::Pointer;
pub use theme::{Rgb, Theme};
pub use line_chart::{LineChart, LineHover, LineInteraction, PathStyle};
pub use area_chart::{AreaChart, AreaInteraction};
pub use tooltip::{Tooltip, TooltipRow};
pub use render::{render_png_bytes, render_to_png, render_to_rgba8, AreaScene, LineScene, RenderOptions, Scene};
pub use page::{Page, Slot};
pub use report::{build_report, write_page};
