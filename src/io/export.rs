//! Writing the report and the optional dataset export.
//!
//! The HTML write is the program's only side effect and happens after the
//! whole report has been rendered in memory, so a failed run never leaves a
//! half-written artifact behind a successful message.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::SalesRecord;
use crate::error::AppError;

/// Canonical report extension.
const REPORT_EXT: &str = "html";

/// Append `.html` to `path` unless it already carries that extension
/// (ASCII case-insensitive).
pub fn normalize_report_path(path: &Path) -> PathBuf {
    let has_report_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(REPORT_EXT))
        == Some(true);

    if has_report_ext {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(REPORT_EXT);
    PathBuf::from(name)
}

/// Write the rendered report page. An existing file at `path` is
/// overwritten without warning.
pub fn write_report_html(path: &Path, page: &str) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create report '{}': {e}", path.display())))?;

    file.write_all(page.as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write report '{}': {e}", path.display())))?;

    log::debug!("wrote {} bytes to {}", page.len(), path.display());

    Ok(())
}

/// Write the raw dataset to a CSV file (spreadsheet-friendly).
pub fn write_dataset_csv(path: &Path, records: &[SalesRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "date,category,sales,profit")
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{}",
            r.date,
            r.category.display_name(),
            r.sales,
            r.profit
        )
        .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
