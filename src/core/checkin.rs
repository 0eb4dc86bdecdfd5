use crate::config::Config;
use crate::core::{VisitorLedger, audit, require};
use crate::errors::{AppError, AppResult};
use crate::models::VisitorRecord;
use crate::store::SheetStore;
use crate::utils::{date, time::format_time};

/// Input of the check-in form.
#[derive(Debug, Clone, Default)]
pub struct CheckIn {
    pub name: String,
    pub id_number: String,
    pub badge_id: String,
    pub time_in: String,
    pub purpose: Option<String>,
    pub guests: Option<u32>,
    /// YYYY-MM-DD or already in the sheet's date format; today when absent.
    pub date: Option<String>,
}

pub struct CheckInLogic;

impl CheckInLogic {
    /// Validate, build the record (before touching the store), append it and
    /// persist the whole sheet. Returns the stored record, numbered.
    pub fn apply(
        store: &mut dyn SheetStore,
        cfg: &Config,
        input: &CheckIn,
    ) -> AppResult<VisitorRecord> {
        let record = Self::build(cfg, input)?;

        let mut ledger = VisitorLedger::try_load(store)?;
        ledger.append(record);
        ledger.persist(store)?;

        let stored = ledger
            .records()
            .last()
            .cloned()
            .ok_or_else(|| AppError::Other("check-in vanished during persist".into()))?;

        audit(
            store,
            "checkin",
            &stored.full_name,
            &format!(
                "#{} {} (KTP {}) in at {}",
                stored.sequence_number, stored.full_name, stored.id_number, stored.time_in
            ),
        );

        Ok(stored)
    }

    /// Turn form input into a fresh IN record.
    pub fn build(cfg: &Config, input: &CheckIn) -> AppResult<VisitorRecord> {
        require(&input.name, "name")?;
        require(&input.id_number, "ID number (KTP)")?;
        require(&input.badge_id, "visitor badge id")?;
        require(&input.time_in, "check-in time")?;

        if input.guests == Some(0) {
            return Err(AppError::Validation("guest count must be at least 1".into()));
        }

        let visit_date = match &input.date {
            Some(d) => date::to_display(d, &cfg.date_format)
                .ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
            None => date::today_display(cfg.utc_offset_hours, &cfg.date_format),
        };

        let mut record = VisitorRecord::check_in(
            visit_date,
            input.name.trim(),
            input.id_number.trim(),
            input.badge_id.trim(),
            format_time(input.time_in.trim()),
        );

        record.purpose = match input.purpose.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => cfg.default_purpose.clone(),
        };
        record.guest_count = input.guests.unwrap_or(1);

        Ok(record)
    }
}
