pub mod checkin;
pub mod checkout;
pub mod del;
pub mod edit;
pub mod export;
pub mod ledger;
pub mod query;
pub mod range;

pub use ledger::{RecordMatch, VisitorLedger};

use crate::models::columns::is_blank;
use crate::store::SheetStore;
use crate::ui::messages::warning;

/// Write an operation-log line; a failing log never fails the request.
pub(crate) fn audit(store: &dyn SheetStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.record_log(operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

/// Reject blank mandatory inputs before anything is loaded. A lone `-`
/// counts as blank, as it does on persist.
pub(crate) fn require(value: &str, field: &str) -> crate::errors::AppResult<()> {
    if is_blank(value) {
        return Err(crate::errors::AppError::Validation(format!(
            "{field} is required"
        )));
    }
    Ok(())
}
