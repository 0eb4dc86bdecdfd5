//! Time utilities: clock input normalization and current time.

use crate::models::columns::SENTINEL;
use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};

/// Separator between hours and minutes in every normalized time.
pub const TIME_SEPARATOR: char = ':';

/// Normalize raw clock input ("0800", "17.00", "800") into `HH:MM`.
///
/// Purely syntactic, no range check:
/// - empty or `-` → `-`
/// - 4 digits → `HH:MM`
/// - 3 digits → `0:` followed by the first two digits (`"800"` → `"0:80"`)
/// - anything else → returned unchanged
pub fn format_time(raw: &str) -> String {
    if raw.is_empty() || raw == SENTINEL {
        return SENTINEL.to_string();
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        4 => format!("{}{}{}", &digits[..2], TIME_SEPARATOR, &digits[2..]),
        // TODO: "800" should probably become "08:00"; kept as "0:80" until the front desk confirms
        3 => format!("0{}{}", TIME_SEPARATOR, &digits[..2]),
        _ => raw.to_string(),
    }
}

/// Local wall clock at a fixed UTC offset (the desk runs on WIB, UTC+7).
pub fn now_at_offset(offset_hours: i32) -> NaiveDateTime {
    let offset = FixedOffset::east_opt(offset_hours.saturating_mul(3600)).unwrap_or(Utc.fix());
    Utc::now().with_timezone(&offset).naive_local()
}

/// Current clock time as `HH:MM`.
pub fn current_time(offset_hours: i32) -> String {
    now_at_offset(offset_hours).format("%H:%M").to_string()
}
