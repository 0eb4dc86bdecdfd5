use crate::config::Config;
use crate::core::VisitorLedger;
use crate::core::query::{QueryLogic, RecordFilter};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, write_records};
use crate::store::SheetStore;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the cleaned, filtered visitor table.
    ///
    /// - `file`: absolute path of the output file
    /// - `filter`: same criteria as `list` (range, status, KTP, name)
    ///
    /// Returns the number of exported rows; 0 means nothing was written.
    pub fn export(
        store: &dyn SheetStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        filter: &RecordFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let mut ledger = VisitorLedger::try_load(store)?;
        // numbering as it would be persisted, without writing anything
        ledger.clean();

        let records = QueryLogic::filter(ledger.records(), cfg, filter)?;

        if records.is_empty() {
            warning("No visitors found for the selected filters.");
            return Ok(0);
        }

        write_records(&records, format, path, &cfg.date_format)?;
        Ok(records.len())
    }
}
