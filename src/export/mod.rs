// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::models::VisitorRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

/// Write already-cleaned records to `path` in `format`.
///
/// `date_format` is the sheet's date layout, used to turn "Tanggal" into
/// real spreadsheet dates.
pub fn write_records(
    records: &[VisitorRecord],
    format: ExportFormat,
    path: &Path,
    date_format: &str,
) -> AppResult<()> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(&rows, path, date_format),
        ExportFormat::Csv => json_csv::export_csv(&rows, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
    }
}
