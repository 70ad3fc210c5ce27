//! HTML report document.
//!
//! A `ReportDocument` is an ordered list of chart specs plus a page title.
//! It is created fresh each run, rendered once, and never mutated after
//! rendering. Each chart is inlined through plotly's own HTML snippet; the
//! page loads plotly.js once from the CDN, so the file stays small and is
//! viewable by double-clicking it in a browser.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use plotly::Plot;

/// Stable div id of the time-series chart.
pub const TREND_DIV_ID: &str = "sales-trend";
/// Stable div id of the per-category bar chart.
pub const TOTALS_DIV_ID: &str = "category-totals";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-latest.min.js";

const PAGE_CSS: &str = "
    body {
        font-family: Arial, sans-serif;
        margin: 24px;
    }
    .chart {
        margin-bottom: 24px;
    }
";

/// Ordered composition of chart specs destined for one output file.
pub struct ReportDocument {
    title: String,
    charts: Vec<(String, Plot)>,
}

impl ReportDocument {
    pub fn new(title: &str) -> Self {
        ReportDocument {
            title: title.to_string(),
            charts: Vec::new(),
        }
    }

    /// Append a chart; charts render stacked vertically in push order.
    pub fn push_chart(&mut self, div_id: &str, chart: Plot) {
        self.charts.push((div_id.to_string(), chart));
    }

    /// Render the whole page as a string ready to be written to disk.
    pub fn render(&self) -> String {
        self.page().into_string()
    }

    fn page(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(PAGE_CSS)) }
                }
                body {
                    h1 { (self.title) }
                    @for (div_id, chart) in &self.charts {
                        div class="chart" {
                            (PreEscaped(chart.to_inline_html(Some(div_id.as_str()))))
                        }
                    }
                }
            }
        }
    }
}
