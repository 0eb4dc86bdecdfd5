use crate::utils::time::now_at_offset;
use chrono::NaiveDate;

/// Default display format of the "Tanggal" column (day-month-year).
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn today(offset_hours: i32) -> NaiveDate {
    now_at_offset(offset_hours).date()
}

/// Today's date rendered for the sheet.
pub fn today_display(offset_hours: i32, fmt: &str) -> String {
    today(offset_hours).format(fmt).to_string()
}

/// Read a sheet date back, trying the configured format first and then the
/// ISO and dotted/slashed variants that older rows were written with.
pub fn parse_visit_date(s: &str, fmt: &str) -> Option<NaiveDate> {
    let s = s.trim();
    [fmt, "%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"]
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Accept either ISO input or an already formatted sheet date; return the
/// sheet representation.
pub fn to_display(input: &str, fmt: &str) -> Option<String> {
    parse_visit_date(input, fmt).map(|d| d.format(fmt).to_string())
}
