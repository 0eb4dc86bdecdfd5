//! Whole-table storage backends.
//!
//! The ledger treats every backend as an opaque remote sheet: it can only
//! read every row at once and replace every row at once.

pub mod csv_file;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;

pub use csv_file::CsvSheet;
pub use memory::MemorySheet;
pub use sqlite::SqliteSheet;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::columns::Row;

/// One line of the internal operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub trait SheetStore {
    /// Every data row in storage order, keyed by header name.
    fn read_all_rows(&self) -> AppResult<Vec<Row>>;

    /// Clear the sheet and write `header` followed by `rows`.
    fn overwrite_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> AppResult<()>;

    /// Append an entry to the operation log, when the backend keeps one.
    fn record_log(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }

    /// Operation log, newest first. `None` when the backend keeps no log.
    fn read_log(&self) -> AppResult<Option<Vec<LogEntry>>> {
        Ok(None)
    }
}

/// Open the backend selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn SheetStore>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteSheet::open(&cfg.database)?)),
        Backend::Csv => Ok(Box::new(CsvSheet::new(&cfg.sheet_file))),
    }
}
