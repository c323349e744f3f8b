// File: crates/ghg-core/src/report.rs
// Summary: Headless end-to-end run: load once, render both views to PNG and write the host page.

use std::path::Path;

use tracing::info;

use crate::area_chart::AreaChart;
use crate::config::Config;
use crate::error::{RenderError, RenderResult};
use crate::line_chart::LineChart;
use crate::page::{Page, Slot};
use crate::pipeline::{self, ViewData};
use crate::render::{render_to_png, AreaScene, LineScene, RenderOptions};
use crate::source::DataSource;

pub const PAGE_TITLE: &str = "Greenhouse Gas Emissions";
pub const COMPARATIVE_PNG: &str = "comparative.png";
pub const CUMULATIVE_PNG: &str = "cumulative.png";
pub const INDEX_HTML: &str = "index.html";

fn chart_slot(image: &str, alt: &str, legend_html: String, opts: &RenderOptions) -> Slot {
    Slot::Chart {
        image: image.to_string(),
        alt: alt.to_string(),
        legend_html: (!opts.draw_legend).then_some(legend_html),
    }
}

/// Build the page for `source`, rendering each available view into `out_dir`.
///
/// A failed load yields a page with only the failure banner. Rendering and
/// file-system failures are returned as errors.
pub fn build_report(source: &dyn DataSource, config: &Config, opts: &RenderOptions, out_dir: &Path) -> RenderResult<Page> {
    let views = match pipeline::load(source, &config.pipeline) {
        Ok(views) => views,
        Err(e) => return Ok(Page::failed(PAGE_TITLE, config.messages.load_failure(e.resource()))),
    };

    let mut page = Page::new(PAGE_TITLE);

    let line = match &views.series {
        ViewData::Ready(set) => LineChart::new(set, &config.line),
        ViewData::NoData => None,
    };
    page.comparative = match line {
        Some(chart) => {
            render_to_png(&LineScene::new(&chart), opts, out_dir.join(COMPARATIVE_PNG))?;
            chart_slot(COMPARATIVE_PNG, "Emissions per person by country", chart.legend.to_html(), opts)
        }
        None => Slot::Message(config.messages.no_data_comparative.clone()),
    };

    let area = match &views.records {
        ViewData::Ready(records) => AreaChart::new(records, &config.pipeline.area_entities, &config.area),
        ViewData::NoData => None,
    };
    page.cumulative = match area {
        Some(chart) => {
            render_to_png(&AreaScene::new(&chart), opts, out_dir.join(CUMULATIVE_PNG))?;
            chart_slot(CUMULATIVE_PNG, "Cumulative emission index", chart.legend.to_html(), opts)
        }
        None => Slot::Message(config.messages.no_data_cumulative.clone()),
    };

    info!(charts = page.chart_count(), out = %out_dir.display(), "report rendered");
    Ok(page)
}

/// Write `page` as `index.html` in `out_dir`.
pub fn write_page(page: &Page, out_dir: &Path) -> RenderResult<()> {
    let path = out_dir.join(INDEX_HTML);
    let write_err = |source: std::io::Error| RenderError::Write { path: path.clone(), source };
    std::fs::create_dir_all(out_dir).map_err(write_err)?;
    std::fs::write(&path, page.to_html()).map_err(write_err)?;
    Ok(())
}
