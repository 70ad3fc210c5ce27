//! The two dashboard charts: sales over time, and total sales per category.
//!
//! Both builders are pure: the same dataset always yields the same chart
//! spec. An empty dataset produces empty charts rather than an error; the
//! generator is the gate against zero-row runs.

use plotly::color::{NamedColor, Rgb};
use plotly::common::{Line, Marker, Mode, Title};
use plotly::configuration::{Configuration, DisplayModeBar};
use plotly::layout::{Axis, AxisType, CategoryOrder, Layout, RangeMode};
use plotly::{Bar, Plot, Scatter};

use crate::domain::{CategoryTotal, SalesRecord};

const CHART_WIDTH: usize = 800;
const CHART_HEIGHT: usize = 350;

/// Qualitative fill palette for category bars (Tol bright scheme).
const PALETTE: [(u8, u8, u8); 6] = [
    (68, 119, 170),  // blue
    (238, 102, 119), // red
    (34, 136, 51),   // green
    (204, 187, 68),  // yellow
    (102, 204, 238), // cyan
    (170, 51, 119),  // purple
];

fn palette_entry(rank: usize) -> (u8, u8, u8) {
    PALETTE[rank % PALETTE.len()]
}

/// Fill color for the category at `rank` (its position in the aggregated
/// order). Ranks past the palette length wrap around.
pub fn category_color(rank: usize) -> Rgb {
    let (r, g, b) = palette_entry(rank);
    Rgb::new(r, g, b)
}

/// Group records by category and sum their sales.
///
/// Categories keep their first-appearance order; they are never re-sorted
/// alphabetically or by value.
pub fn aggregate_sales(records: &[SalesRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for r in records {
        match totals.iter_mut().find(|t| t.category == r.category) {
            Some(t) => t.total_sales += r.sales,
            None => totals.push(CategoryTotal {
                category: r.category,
                total_sales: r.sales,
            }),
        }
    }
    totals
}

/// Line+scatter chart of sales over time.
///
/// Hovering a point shows the date, the sales amount as currency, and the
/// record's category.
pub fn sales_trend_chart(records: &[SalesRecord]) -> Plot {
    let dates: Vec<String> = records
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect();
    let sales: Vec<i64> = records.iter().map(|r| r.sales).collect();
    let categories: Vec<String> = records
        .iter()
        .map(|r| r.category.display_name().to_string())
        .collect();

    let hover = "Date: %{x|%Y-%m-%d}<br>Sales: $%{y}<br>Category: %{text}<extra></extra>";

    let line = Scatter::new(dates.clone(), sales.clone())
        .name("Trend")
        .mode(Mode::Lines)
        .line(Line::new().color(NamedColor::Navy).width(2.0))
        .text_array(categories.clone())
        .hover_template(hover);
    let points = Scatter::new(dates, sales)
        .mode(Mode::Markers)
        .marker(Marker::new().color(NamedColor::Orange).size(5))
        .text_array(categories)
        .hover_template(hover)
        .show_legend(false);

    let layout = Layout::new()
        .title(Title::with_text("Sales over time"))
        .width(CHART_WIDTH)
        .height(CHART_HEIGHT)
        .x_axis(Axis::new().title(Title::with_text("Date")).type_(AxisType::Date))
        .y_axis(Axis::new().title(Title::with_text("Sales ($)")));

    let mut plot = Plot::new();
    plot.add_trace(line);
    plot.add_trace(points);
    plot.set_layout(layout);
    plot
}

/// Bar chart of summed sales per category.
///
/// The x-axis domain is pinned to the aggregated order; each bar gets its
/// palette color by rank. The pan/zoom toolbar is disabled for this chart.
pub fn category_totals_chart(totals: &[CategoryTotal]) -> Plot {
    let categories: Vec<String> = totals
        .iter()
        .map(|t| t.category.display_name().to_string())
        .collect();
    let values: Vec<i64> = totals.iter().map(|t| t.total_sales).collect();
    let colors: Vec<Rgb> = (0..totals.len()).map(category_color).collect();

    let bars = Bar::new(categories.clone(), values).marker(
        Marker::new()
            .color_array(colors)
            .line(Line::new().color(NamedColor::White).width(1.0)),
    );

    let layout = Layout::new()
        .title(Title::with_text("Total sales by category"))
        .width(CHART_WIDTH)
        .height(CHART_HEIGHT)
        .x_axis(
            Axis::new()
                .category_order(CategoryOrder::Array)
                .category_array(categories)
                .show_grid(false),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Total sales ($)"))
                .range_mode(RangeMode::ToZero),
        );

    let mut plot = Plot::new();
    plot.add_trace(bars);
    plot.set_layout(layout);
    plot.set_configuration(Configuration::new().display_mode_bar(DisplayModeBar::False));
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_sales;
    use crate::domain::{Category, GenConfig};

    fn record(date: &str, category: Category, sales: i64) -> SalesRecord {
        SalesRecord {
            date: date.parse().unwrap(),
            category,
            sales,
            profit: 10,
        }
    }

    #[test]
    fn aggregation_preserves_first_appearance_order() {
        let records = vec![
            record("2023-01-01", Category::Toys, 100),
            record("2023-01-04", Category::Electronics, 200),
            record("2023-01-07", Category::Toys, 300),
            record("2023-01-10", Category::Garden, 150),
        ];

        let totals = aggregate_sales(&records);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].category, Category::Toys);
        assert_eq!(totals[0].total_sales, 400);
        assert_eq!(totals[1].category, Category::Electronics);
        assert_eq!(totals[2].category, Category::Garden);
    }

    #[test]
    fn aggregation_total_matches_dataset_total() {
        let records = generate_sales(&GenConfig { rows: 100, seed: 42 }).unwrap();
        let dataset_total: i64 = records.iter().map(|r| r.sales).sum();
        let aggregated_total: i64 = aggregate_sales(&records)
            .iter()
            .map(|t| t.total_sales)
            .sum();
        assert_eq!(aggregated_total, dataset_total);
    }

    #[test]
    fn single_category_yields_single_row() {
        let records = vec![
            record("2023-01-01", Category::Home, 120),
            record("2023-01-04", Category::Home, 130),
        ];
        let totals = aggregate_sales(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_sales, 250);
    }

    #[test]
    fn empty_dataset_aggregates_to_nothing() {
        assert!(aggregate_sales(&[]).is_empty());
    }

    #[test]
    fn palette_wraps_past_six_categories() {
        assert_eq!(palette_entry(6), palette_entry(0));
        assert_eq!(palette_entry(8), palette_entry(2));
        assert_ne!(palette_entry(0), palette_entry(1));
    }

    #[test]
    fn chart_building_is_idempotent() {
        let records = generate_sales(&GenConfig { rows: 20, seed: 42 }).unwrap();
        let a = sales_trend_chart(&records).to_inline_html(Some("t"));
        let b = sales_trend_chart(&records).to_inline_html(Some("t"));
        assert_eq!(a, b);

        let totals = aggregate_sales(&records);
        let a = category_totals_chart(&totals).to_inline_html(Some("b"));
        let b = category_totals_chart(&totals).to_inline_html(Some("b"));
        assert_eq!(a, b);
    }

    #[test]
    fn bar_chart_carries_every_aggregated_category() {
        let records = generate_sales(&GenConfig { rows: 100, seed: 42 }).unwrap();
        let totals = aggregate_sales(&records);
        let html = category_totals_chart(&totals).to_inline_html(Some("bars"));
        for t in &totals {
            assert!(
                html.contains(t.category.display_name()),
                "missing category {}",
                t.category
            );
        }
    }
}
