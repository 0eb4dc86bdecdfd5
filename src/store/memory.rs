//! In-process sheet, used by tests and by callers that only need a scratch
//! table.

use crate::errors::{AppError, AppResult};
use crate::models::columns::Row;
use crate::store::SheetStore;

#[derive(Debug, Default, Clone)]
pub struct MemorySheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet pre-filled with `header` and raw `rows`.
    pub fn with_rows(header: &[&str], rows: Vec<Vec<&str>>) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
            ..Self::default()
        }
    }
}

impl SheetStore for MemorySheet {
    fn read_all_rows(&self) -> AppResult<Vec<Row>> {
        if self.fail_reads {
            return Err(AppError::Storage("memory sheet: read refused".into()));
        }

        Ok(self
            .rows
            .iter()
            .map(|cells| self.header.iter().cloned().zip(cells.iter().cloned()).collect())
            .collect())
    }

    fn overwrite_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("memory sheet: write refused".into()));
        }

        self.header = header.iter().map(|h| h.to_string()).collect();
        self.rows = rows.to_vec();
        self.writes += 1;
        Ok(())
    }
}
