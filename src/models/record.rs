use super::columns::{
    COL_BADGE, COL_DATE, COL_GUESTS, COL_ID_NUMBER, COL_NAME, COL_PURPOSE, COL_STATUS,
    COL_TIME_IN, COL_TIME_OUT, DEFAULT_PURPOSE, Row, SENTINEL, is_blank, or_sentinel,
};
use super::status::VisitStatus;

/// One logical visit, i.e. one data row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorRecord {
    pub sequence_number: u32,     // ⇔ "No" (0 = not yet numbered)
    pub visit_date: String,       // ⇔ "Tanggal" (day-month-year)
    pub full_name: String,        // ⇔ "Nama"
    pub id_number: String,        // ⇔ "No KTP"
    pub purpose: String,          // ⇔ "Keperluan"
    pub guest_count: u32,         // ⇔ "Jumlah Tamu"
    pub visitor_badge_id: String, // ⇔ "Visitor Id"
    pub time_in: String,          // ⇔ "Jam Masuk"  ("-" = absent)
    pub time_out: String,         // ⇔ "Jam Keluar" ("-" = still inside)
    pub status: VisitStatus,      // ⇔ "Status"
}

impl VisitorRecord {
    /// Builds a fresh check-in: status IN, no check-out time, not numbered.
    pub fn check_in(
        visit_date: impl Into<String>,
        full_name: impl Into<String>,
        id_number: impl Into<String>,
        visitor_badge_id: impl Into<String>,
        time_in: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number: 0,
            visit_date: visit_date.into(),
            full_name: full_name.into(),
            id_number: id_number.into(),
            purpose: DEFAULT_PURPOSE.to_string(),
            guest_count: 1,
            visitor_badge_id: visitor_badge_id.into(),
            time_in: time_in.into(),
            time_out: SENTINEL.to_string(),
            status: VisitStatus::In,
        }
    }

    /// Rebuild a record from a sheet row.
    ///
    /// Returns `None` for corrupt rows (blank name). The stored `No` is
    /// ignored; numbering is reassigned on persist.
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = cell(row, COL_NAME);
        if is_blank(&name) {
            return None;
        }

        let time_out = cell(row, COL_TIME_OUT);
        let status = VisitStatus::parse(&cell(row, COL_STATUS)).unwrap_or(if is_blank(&time_out) {
            VisitStatus::In
        } else {
            VisitStatus::Out
        });

        let purpose = cell(row, COL_PURPOSE);

        Some(Self {
            sequence_number: 0,
            visit_date: or_sentinel(&cell(row, COL_DATE)),
            full_name: name,
            id_number: or_sentinel(&cell(row, COL_ID_NUMBER)),
            purpose: if is_blank(&purpose) {
                DEFAULT_PURPOSE.to_string()
            } else {
                purpose
            },
            guest_count: parse_guest_count(&cell(row, COL_GUESTS)),
            visitor_badge_id: or_sentinel(&cell(row, COL_BADGE)),
            time_in: or_sentinel(&cell(row, COL_TIME_IN)),
            time_out: or_sentinel(&time_out),
            status,
        })
    }

    /// Cells in canonical column order, blanks replaced by the sentinel.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.sequence_number.to_string(),
            or_sentinel(&self.visit_date),
            or_sentinel(&self.full_name),
            or_sentinel(&self.id_number),
            or_sentinel(&self.purpose),
            self.guest_count.max(1).to_string(),
            or_sentinel(&self.visitor_badge_id),
            or_sentinel(&self.time_in),
            or_sentinel(&self.time_out),
            self.status.as_str().to_string(),
        ]
    }

    pub fn has_name(&self) -> bool {
        !is_blank(&self.full_name)
    }

    /// Same person: case-insensitive name, exact ID number.
    pub fn same_identity(&self, name: &str, id_number: &str) -> bool {
        self.name_matches(name) && self.id_number.trim() == id_number.trim()
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.full_name.trim().eq_ignore_ascii_case(name.trim())
    }
}

fn cell(row: &Row, column: &str) -> String {
    row.get(column)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Guest count cells may come back as "2", "2.0" or garbage; anything that
/// is not a positive number counts as one guest.
pub fn parse_guest_count(s: &str) -> u32 {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return n.max(1);
    }
    match s.parse::<f64>() {
        Ok(f) if f >= 1.0 && f <= u32::MAX as f64 => f as u32,
        _ => 1,
    }
}
