// File: crates/ghg-core/src/page.rs
// Summary: Host page model: failure banner plus one slot per chart, serialized to standalone HTML.

use crate::format::escape_html;

/// Content of one chart container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    /// Nothing rendered (after a fatal load failure).
    #[default]
    Empty,
    Chart {
        /// Image path relative to the page.
        image: String,
        alt: String,
        /// HTML legend shown above the image when the image carries none.
        legend_html: Option<String>,
    },
    /// No data for the view's selection.
    Message(String),
}

impl Slot {
    pub fn is_chart(&self) -> bool {
        matches!(self, Self::Chart { .. })
    }

    fn to_html(&self, id: &str) -> String {
        let body = match self {
            Self::Empty => String::new(),
            Self::Chart { image, alt, legend_html } => format!(
                "{}<img src=\"{}\" alt=\"{}\">",
                legend_html.as_deref().unwrap_or_default(),
                escape_html(image),
                escape_html(alt)
            ),
            Self::Message(text) => format!("<p>{}</p>", escape_html(text)),
        };
        format!("<div id=\"{id}\" class=\"vis\">{body}</div>")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// Fatal load failure text, shown above everything else.
    pub banner: Option<String>,
    pub comparative: Slot,
    pub cumulative: Slot,
}

const STYLE: &str = "body{font-family:sans-serif;margin:24px;}\
.banner{color:red;font-weight:bold;}\
.vis{margin-bottom:32px;}\
.legend{display:flex;flex-wrap:wrap;gap:12px;margin-bottom:8px;}\
.legend-item{display:flex;align-items:center;gap:6px;}\
.legend-color-box{display:inline-block;width:14px;height:14px;}";

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Page for a load that failed before any chart could be drawn.
    pub fn failed(title: impl Into<String>, banner: impl Into<String>) -> Self {
        Self { banner: Some(banner.into()), ..Self::new(title) }
    }

    pub fn chart_count(&self) -> usize {
        [&self.comparative, &self.cumulative].iter().filter(|s| s.is_chart()).count()
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let banner = self
            .banner
            .as_deref()
            .map(|b| format!("<p class=\"banner\">{}</p>", escape_html(b)))
            .unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <style>{STYLE}</style>\n</head>\n<body>\n<div class=\"container\">\n{banner}<h1>{title}</h1>\n{}\n{}\n</div>\n</body>\n</html>\n",
            self.comparative.to_html("comparative-vis"),
            self.cumulative.to_html("cumulative-vis"),
        )
    }
}
