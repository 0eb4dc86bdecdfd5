//! In-memory visitor table and whole-table synchronization with a store.
//!
//! Every request follows the same cycle: load the whole sheet, change one
//! record, persist the whole sheet. Sequence numbers are recomputed on each
//! persist, so callers must re-resolve a record (by name, ID number or
//! position) right before mutating it.

use crate::errors::{AppError, AppResult};
use crate::models::VisitorRecord;
use crate::models::columns::CANONICAL_COLUMNS;
use crate::store::SheetStore;
use crate::ui::messages::warning;
use crate::utils::time;

/// How a caller designates the record to mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordMatch {
    /// Case-insensitive full name.
    ByName(String),
    /// Case-insensitive full name plus exact ID number.
    ByNameAndId { name: String, id_number: String },
    /// 0-based position in the current table.
    ByPosition(usize),
}

impl RecordMatch {
    pub fn describe(&self) -> String {
        match self {
            RecordMatch::ByName(n) => format!("name '{n}'"),
            RecordMatch::ByNameAndId { name, id_number } => {
                format!("name '{name}' with ID '{id_number}'")
            }
            RecordMatch::ByPosition(p) => format!("row {}", p + 1),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitorLedger {
    records: Vec<VisitorRecord>,
}

impl VisitorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and clean the whole sheet.
    ///
    /// A store that is empty, unreachable or unreadable yields an empty
    /// table: the result may be degraded, not necessarily truly empty.
    pub fn load(store: &dyn SheetStore) -> Self {
        match Self::try_load(store) {
            Ok(ledger) => ledger,
            Err(e) => {
                warning(format!("Visitor sheet unavailable, showing an empty table ({e})"));
                Self::new()
            }
        }
    }

    /// Like [`VisitorLedger::load`], but reports transport errors so that a
    /// degraded read is never written back over the real table.
    pub fn try_load(store: &dyn SheetStore) -> AppResult<Self> {
        let rows = store.read_all_rows()?;
        let records = rows.iter().filter_map(VisitorRecord::from_row).collect();
        Ok(Self { records })
    }

    pub fn records(&self) -> &[VisitorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&VisitorRecord> {
        self.records.get(position)
    }

    /// Append at the end of the table (chronological order). Not persisted.
    pub fn append(&mut self, mut record: VisitorRecord) {
        record.sequence_number = 0;
        self.records.push(record);
    }

    /// Position of the last record (table order) satisfying `predicate`.
    pub fn find_last<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&VisitorRecord) -> bool,
    {
        self.records.iter().rposition(predicate)
    }

    /// Apply `mutator` to exactly one record: the most recent one that
    /// satisfies `predicate`. Returns its position.
    pub fn update<P, M>(&mut self, predicate: P, mutator: M) -> AppResult<usize>
    where
        P: Fn(&VisitorRecord) -> bool,
        M: FnOnce(&mut VisitorRecord),
    {
        let pos = self
            .find_last(predicate)
            .ok_or_else(|| AppError::RecordNotFound("no record satisfies the lookup".into()))?;
        mutator(&mut self.records[pos]);
        Ok(pos)
    }

    /// [`VisitorLedger::update`] driven by one of the standard lookups.
    pub fn update_matching<M>(&mut self, lookup: &RecordMatch, mutator: M) -> AppResult<usize>
    where
        M: FnOnce(&mut VisitorRecord),
    {
        let pos = match lookup {
            RecordMatch::ByPosition(p) => {
                if *p >= self.records.len() {
                    return Err(AppError::InvalidPosition(p + 1));
                }
                *p
            }
            RecordMatch::ByName(name) => self
                .find_last(|r| r.name_matches(name))
                .ok_or_else(|| AppError::RecordNotFound(lookup.describe()))?,
            RecordMatch::ByNameAndId { name, id_number } => self
                .find_last(|r| r.same_identity(name, id_number))
                .ok_or_else(|| AppError::RecordNotFound(lookup.describe()))?,
        };

        mutator(&mut self.records[pos]);
        Ok(pos)
    }

    /// Remove the record at `position` (0-based). Numbering is fixed on persist.
    pub fn delete(&mut self, position: usize) -> AppResult<VisitorRecord> {
        if position >= self.records.len() {
            return Err(AppError::InvalidPosition(position + 1));
        }
        Ok(self.records.remove(position))
    }

    /// Drop nameless records and renumber the rest `1..N` in table order.
    pub fn clean(&mut self) {
        self.records.retain(VisitorRecord::has_name);
        for (i, r) in self.records.iter_mut().enumerate() {
            r.sequence_number = (i + 1) as u32;
        }
    }

    /// Clean, then replace the whole sheet with header + every record.
    ///
    /// The in-memory table keeps its cleaned state even if the write fails.
    pub fn persist(&mut self, store: &mut dyn SheetStore) -> AppResult<()> {
        self.clean();

        let rows: Vec<Vec<String>> = self.records.iter().map(VisitorRecord::to_cells).collect();
        store.overwrite_all(&CANONICAL_COLUMNS, &rows)
    }

    /// See [`time::format_time`].
    pub fn format_time(raw: &str) -> String {
        time::format_time(raw)
    }
}
