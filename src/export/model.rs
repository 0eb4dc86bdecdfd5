// src/export/model.rs

use crate::models::VisitorRecord;
use crate::models::columns::{CANONICAL_COLUMNS, COL_GUESTS, COL_NO};
use serde::Serialize;

/// Struttura “piatta” per export, una riga del foglio.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "No")]
    pub no: u32,
    #[serde(rename = "Tanggal")]
    pub date: String,
    #[serde(rename = "Nama")]
    pub name: String,
    #[serde(rename = "No KTP")]
    pub id_number: String,
    #[serde(rename = "Keperluan")]
    pub purpose: String,
    #[serde(rename = "Jumlah Tamu")]
    pub guests: u32,
    #[serde(rename = "Visitor Id")]
    pub badge_id: String,
    #[serde(rename = "Jam Masuk")]
    pub time_in: String,
    #[serde(rename = "Jam Keluar")]
    pub time_out: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&VisitorRecord> for RecordExport {
    fn from(r: &VisitorRecord) -> Self {
        let cells = r.to_cells();
        Self {
            no: r.sequence_number,
            date: cells[1].clone(),
            name: cells[2].clone(),
            id_number: cells[3].clone(),
            purpose: cells[4].clone(),
            guests: r.guest_count.max(1),
            badge_id: cells[6].clone(),
            time_in: cells[7].clone(),
            time_out: cells[8].clone(),
            status: cells[9].clone(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    CANONICAL_COLUMNS.to_vec()
}

/// Columns written as numbers in spreadsheets; the rest stay text so that
/// ID numbers keep every digit.
pub(crate) fn is_numeric_column(col: usize) -> bool {
    CANONICAL_COLUMNS
        .get(col)
        .is_some_and(|c| *c == COL_NO || *c == COL_GUESTS)
}

/// Convert a record in una riga di stringhe.
pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.no.to_string(),
        e.date.clone(),
        e.name.clone(),
        e.id_number.clone(),
        e.purpose.clone(),
        e.guests.to_string(),
        e.badge_id.clone(),
        e.time_in.clone(),
        e.time_out.clone(),
        e.status.clone(),
    ]
}
