use crate::core::{VisitorLedger, audit};
use crate::errors::{AppError, AppResult};
use crate::models::VisitorRecord;
use crate::store::SheetStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the row shown as `row_no` (1-based) and persist; the remaining
    /// rows are renumbered.
    pub fn apply(store: &mut dyn SheetStore, row_no: usize) -> AppResult<VisitorRecord> {
        if row_no == 0 {
            return Err(AppError::InvalidPosition(row_no));
        }

        let mut ledger = VisitorLedger::try_load(store)?;
        let removed = ledger.delete(row_no - 1)?;
        ledger.persist(store)?;

        audit(
            store,
            "delete",
            &removed.full_name,
            &format!(
                "row {} deleted: {} (KTP {}) {}",
                row_no, removed.full_name, removed.id_number, removed.visit_date
            ),
        );

        Ok(removed)
    }
}
