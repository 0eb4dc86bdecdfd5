use crate::config::Config;
use crate::core::range::parse_range;
use crate::errors::AppResult;
use crate::models::{VisitStatus, VisitorRecord};
use crate::utils::date::parse_visit_date;
use chrono::NaiveDate;

/// Criteria shared by `list`, `search` and `export`. Unset fields match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// --range expression, see [`parse_range`]; "all" disables it.
    pub range: Option<String>,
    pub status: Option<VisitStatus>,
    /// Exact national ID number.
    pub id_number: Option<String>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
}

pub struct QueryLogic;

impl QueryLogic {
    /// Records that satisfy `filter`, table order and numbering preserved.
    ///
    /// With a date range, rows whose date cannot be read are left out.
    pub fn filter(
        records: &[VisitorRecord],
        cfg: &Config,
        filter: &RecordFilter,
    ) -> AppResult<Vec<VisitorRecord>> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match filter.range.as_deref() {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let name = filter.name.as_ref().map(|n| n.trim().to_lowercase());

        Ok(records
            .iter()
            .filter(|r| filter.status.is_none_or(|s| r.status == s))
            .filter(|r| {
                filter
                    .id_number
                    .as_ref()
                    .is_none_or(|id| r.id_number.trim() == id.trim())
            })
            .filter(|r| {
                name.as_ref()
                    .is_none_or(|n| r.full_name.to_lowercase().contains(n.as_str()))
            })
            .filter(|r| match bounds {
                None => true,
                Some((start, end)) => parse_visit_date(&r.visit_date, &cfg.date_format)
                    .is_some_and(|d| d >= start && d <= end),
            })
            .cloned()
            .collect())
    }

    /// Visit history of one person: every record carrying `id_number`,
    /// optionally narrowed to a name.
    pub fn history(
        records: &[VisitorRecord],
        id_number: &str,
        name: Option<&str>,
    ) -> Vec<VisitorRecord> {
        records
            .iter()
            .filter(|r| r.id_number.trim() == id_number.trim())
            .filter(|r| name.is_none_or(|n| r.name_matches(n)))
            .cloned()
            .collect()
    }
}
