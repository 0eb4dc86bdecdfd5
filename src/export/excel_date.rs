// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Prova a interpretare il "Tanggal" di una riga come data,
/// restituendo il *seriale Excel* + formattazione numerica.
pub(crate) fn date_to_excel(s: &str, fmt: &str) -> Option<(&'static str, f64)> {
    let d = crate::utils::date::parse_visit_date(s, fmt)?;
    Some(("dd-mm-yyyy", naive_date_to_excel_serial(d)?))
}

/// "HH:MM" → frazione di giorno. Times outside 00:00–23:59 stay text.
pub(crate) fn time_to_excel(s: &str) -> Option<(&'static str, f64)> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()?;
    let seconds = t.num_seconds_from_midnight() as f64;
    Some(("hh:mm", seconds / 86400.0))
}

fn naive_date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
