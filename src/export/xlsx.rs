// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_to_excel, time_to_excel};
use crate::export::model::{get_headers, is_numeric_column, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::models::columns::{CANONICAL_COLUMNS, COL_DATE, COL_TIME_IN, COL_TIME_OUT};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// How a cell of a given column should be typed in the workbook.
#[derive(Clone, Copy)]
enum CellKind {
    Date,
    Time,
    Number,
    Text,
}

fn cell_kind(col: usize) -> CellKind {
    match CANONICAL_COLUMNS.get(col) {
        Some(&c) if c == COL_DATE => CellKind::Date,
        Some(&c) if c == COL_TIME_IN || c == COL_TIME_OUT => CellKind::Time,
        _ if is_numeric_column(col) => CellKind::Number,
        _ => CellKind::Text,
    }
}

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path, date_format: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Visitors").map_err(to_export_error)?;

    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if records.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Calcolo larghezze colonne
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_xlsx_cell(
                worksheet,
                row,
                col as u16,
                value,
                cell_kind(col),
                band_color,
                date_format,
            )?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    worksheet
        .autofilter(0, 0, records.len() as u32, (headers.len() - 1) as u16)
        .map_err(to_export_error)?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella: data/ora Excel, numero o testo secondo la
/// colonna; se il valore non si lascia interpretare resta testo.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: CellKind,
    bg: Color,
    date_format: &str,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let serial = match kind {
        CellKind::Date => date_to_excel(s, date_format),
        CellKind::Time => time_to_excel(s),
        _ => None,
    };

    // Data / Ora in formato Excel
    if let Some((num_format, serial)) = serial {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    // Numero
    if matches!(kind, CellKind::Number)
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    // Testo
    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
