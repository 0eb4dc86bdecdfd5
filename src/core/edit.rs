use crate::config::Config;
use crate::core::{RecordMatch, VisitorLedger, audit};
use crate::errors::{AppError, AppResult};
use crate::models::columns::is_blank;
use crate::models::{VisitStatus, VisitorRecord};
use crate::store::SheetStore;
use crate::utils::{date, time::format_time};

/// Administrative patch: every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub date: Option<String>,
    pub name: Option<String>,
    pub id_number: Option<String>,
    pub purpose: Option<String>,
    pub guests: Option<u32>,
    pub badge_id: Option<String>,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub status: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.name.is_none()
            && self.id_number.is_none()
            && self.purpose.is_none()
            && self.guests.is_none()
            && self.badge_id.is_none()
            && self.time_in.is_none()
            && self.time_out.is_none()
            && self.status.is_none()
    }
}

/// Patch with every value already checked and normalized.
struct ValidPatch {
    date: Option<String>,
    name: Option<String>,
    id_number: Option<String>,
    purpose: Option<String>,
    guests: Option<u32>,
    badge_id: Option<String>,
    time_in: Option<String>,
    time_out: Option<String>,
    status: Option<VisitStatus>,
}

impl ValidPatch {
    fn apply_to(self, r: &mut VisitorRecord) {
        if let Some(v) = self.date {
            r.visit_date = v;
        }
        if let Some(v) = self.name {
            r.full_name = v;
        }
        if let Some(v) = self.id_number {
            r.id_number = v;
        }
        if let Some(v) = self.purpose {
            r.purpose = v;
        }
        if let Some(v) = self.guests {
            r.guest_count = v;
        }
        if let Some(v) = self.badge_id {
            r.visitor_badge_id = v;
        }
        if let Some(v) = self.time_in {
            r.time_in = v;
        }
        if let Some(v) = self.time_out {
            r.time_out = v;
        }
        if let Some(v) = self.status {
            r.status = v;
        }
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Edit the row shown as `row_no` (1-based, as printed by `list`).
    pub fn apply(
        store: &mut dyn SheetStore,
        cfg: &Config,
        row_no: usize,
        patch: &RecordPatch,
    ) -> AppResult<VisitorRecord> {
        let valid = Self::validate(cfg, patch)?;
        if row_no == 0 {
            return Err(AppError::InvalidPosition(row_no));
        }

        let mut ledger = VisitorLedger::try_load(store)?;
        let pos = ledger.update_matching(&RecordMatch::ByPosition(row_no - 1), |r| {
            valid.apply_to(r)
        })?;
        ledger.persist(store)?;

        let stored = ledger
            .get(pos)
            .cloned()
            .ok_or_else(|| AppError::Other("edited row vanished during persist".into()))?;

        audit(
            store,
            "edit",
            &stored.full_name,
            &format!("row {row_no} edited"),
        );

        Ok(stored)
    }

    fn validate(cfg: &Config, patch: &RecordPatch) -> AppResult<ValidPatch> {
        if patch.is_empty() {
            return Err(AppError::Validation("nothing to edit".into()));
        }

        if let Some(n) = &patch.name
            && is_blank(n)
        {
            return Err(AppError::Validation("name cannot be blank".into()));
        }

        if patch.guests == Some(0) {
            return Err(AppError::Validation("guest count must be at least 1".into()));
        }

        let date = match &patch.date {
            Some(d) => Some(
                date::to_display(d, &cfg.date_format)
                    .ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
            ),
            None => None,
        };

        let status = match &patch.status {
            Some(s) => {
                Some(VisitStatus::parse(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))?)
            }
            None => None,
        };

        let trimmed = |v: &Option<String>| v.as_ref().map(|s| s.trim().to_string());

        Ok(ValidPatch {
            date,
            name: trimmed(&patch.name),
            id_number: trimmed(&patch.id_number),
            purpose: trimmed(&patch.purpose),
            guests: patch.guests,
            badge_id: trimmed(&patch.badge_id),
            time_in: patch.time_in.as_deref().map(|t| format_time(t.trim())),
            time_out: patch.time_out.as_deref().map(|t| format_time(t.trim())),
            status,
        })
    }
}
