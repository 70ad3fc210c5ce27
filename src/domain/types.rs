//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - produced by the generator and consumed by the chart builders as-is
//! - summarized for terminal output
//! - exported to CSV without any conversion layer

use std::path::PathBuf;

use chrono::NaiveDate;

/// Product category of a sales record.
///
/// The set is fixed; the generator draws uniformly from `Category::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Garden,
    Toys,
    Sports,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Garden,
        Category::Toys,
        Category::Sports,
    ];

    /// Human-readable label used on axes, tooltips and exports.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Garden => "Garden",
            Category::Toys => "Toys",
            Category::Sports => "Sports",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the synthetic dataset. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub category: Category,
    /// Sales amount in whole dollars, within [100, 1000).
    pub sales: i64,
    /// Profit amount in whole dollars, within [10, 300).
    pub profit: i64,
}

/// Summed sales for one category, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_sales: i64,
}

/// Summary of a generated dataset (used for terminal output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub n_records: usize,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub sales_min: i64,
    pub sales_max: i64,
}

/// Generation parameters.
///
/// The generator is pure given this config: same `(rows, seed)` pair,
/// same dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    pub rows: usize,
    pub seed: u64,
}

/// A full `sdash report` run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults); `output = None` means
/// the user is prompted interactively for a file name.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub r#gen: GenConfig,
    pub output: Option<PathBuf>,
    pub export: Option<PathBuf>,
}
