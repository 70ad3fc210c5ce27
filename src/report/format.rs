//! Formatted terminal output for `sdash summary`.

use crate::domain::{CategoryTotal, DatasetStats, GenConfig};

/// Format the dataset summary (generation parameters + per-category totals).
pub fn format_summary(
    config: &GenConfig,
    stats: &DatasetStats,
    totals: &[CategoryTotal],
) -> String {
    let mut out = String::new();

    out.push_str("=== sdash - Synthetic Sales Dataset ===\n");
    out.push_str(&format!(
        "Rows: {} | seed: {}\n",
        stats.n_records, config.seed
    ));
    out.push_str(&format!(
        "Dates: {} .. {}\n",
        stats.date_min, stats.date_max
    ));
    out.push_str(&format!(
        "Sales per record: [{}, {}]\n",
        stats.sales_min, stats.sales_max
    ));

    out.push_str("\nTotal sales by category:\n");
    for t in totals {
        out.push_str(&format!(
            "  {:<12} ${:>8}\n",
            t.category.display_name(),
            t.total_sales
        ));
    }
    let grand_total: i64 = totals.iter().map(|t| t.total_sales).sum();
    out.push_str(&format!("  {:<12} ${:>8}\n", "Total", grand_total));

    out
}
