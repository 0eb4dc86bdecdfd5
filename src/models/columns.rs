//! Canonical sheet layout.

use std::collections::HashMap;

/// A sheet row as read from the store: column header → cell text.
pub type Row = HashMap<String, String>;

/// Placeholder written into every blank cell.
pub const SENTINEL: &str = "-";

/// Purpose used when a check-in does not state one.
pub const DEFAULT_PURPOSE: &str = "Kunjungan";

pub const COL_NO: &str = "No";
pub const COL_DATE: &str = "Tanggal";
pub const COL_NAME: &str = "Nama";
pub const COL_ID_NUMBER: &str = "No KTP";
pub const COL_PURPOSE: &str = "Keperluan";
pub const COL_GUESTS: &str = "Jumlah Tamu";
pub const COL_BADGE: &str = "Visitor Id";
pub const COL_TIME_IN: &str = "Jam Masuk";
pub const COL_TIME_OUT: &str = "Jam Keluar";
pub const COL_STATUS: &str = "Status";

/// Column order required for every persist and every export.
pub const CANONICAL_COLUMNS: [&str; 10] = [
    COL_NO,
    COL_DATE,
    COL_NAME,
    COL_ID_NUMBER,
    COL_PURPOSE,
    COL_GUESTS,
    COL_BADGE,
    COL_TIME_IN,
    COL_TIME_OUT,
    COL_STATUS,
];

/// True when the cell carries no information (missing, blank or sentinel).
pub fn is_blank(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == SENTINEL
}

/// Returns the cell text, or the sentinel when the cell is blank.
pub fn or_sentinel(value: &str) -> String {
    if value.trim().is_empty() {
        SENTINEL.to_string()
    } else {
        value.trim().to_string()
    }
}
