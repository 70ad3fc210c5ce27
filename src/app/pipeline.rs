//! Shared dataset pipeline used by both subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! generate -> stats -> aggregate
//!
//! The `report` and `summary` commands then focus on presentation
//! (HTML document vs terminal tables).

use crate::chart::aggregate_sales;
use crate::data::{compute_stats, generate_sales};
use crate::domain::{CategoryTotal, DatasetStats, GenConfig, SalesRecord};
use crate::error::AppError;

/// All computed outputs of a single dataset run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<SalesRecord>,
    pub stats: DatasetStats,
    pub totals: Vec<CategoryTotal>,
}

/// Generate the dataset and derive its summaries.
pub fn run_dataset(config: &GenConfig) -> Result<RunOutput, AppError> {
    let records = generate_sales(config)?;

    // `generate_sales` rejects zero-row configs, so stats always exist here.
    let stats = compute_stats(&records)
        .ok_or_else(|| AppError::internal("Generated dataset is unexpectedly empty."))?;
    let totals = aggregate_sales(&records);

    Ok(RunOutput {
        records,
        stats,
        totals,
    })
}
