//! SQLite-backed sheet (lightweight, one connection per CLI run).

use crate::errors::AppResult;
use crate::models::columns::Row;
use crate::store::migrate::run_pending_migrations;
use crate::store::{LogEntry, SheetStore, log};
use chrono::Local;
use rusqlite::{Connection, params};
use std::path::Path;

pub struct SqliteSheet {
    pub conn: Connection,
}

impl SqliteSheet {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database, schema included.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    fn header(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sheet_header ORDER BY col_index ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl SheetStore for SqliteSheet {
    fn read_all_rows(&self) -> AppResult<Vec<Row>> {
        let header = self.header()?;
        if header.is_empty() {
            return Ok(Vec::new());
        }

        let mut stmt = self
            .conn
            .prepare("SELECT cells FROM sheet_rows ORDER BY row_index ASC")?;
        let raw = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in raw {
            let text = r?;
            // un JSON illeggibile equivale a una riga corrotta: la si scarta
            let Ok(cells) = serde_json::from_str::<Vec<String>>(&text) else {
                continue;
            };
            let row: Row = header.iter().cloned().zip(cells).collect();
            out.push(row);
        }
        Ok(out)
    }

    fn overwrite_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM sheet_header", [])?;
        tx.execute("DELETE FROM sheet_rows", [])?;

        {
            let mut ins_header =
                tx.prepare("INSERT INTO sheet_header (col_index, name) VALUES (?1, ?2)")?;
            for (i, name) in header.iter().enumerate() {
                ins_header.execute(params![i as i64, name])?;
            }

            let mut ins_row = tx.prepare(
                "INSERT INTO sheet_rows (row_index, cells, written_at) VALUES (?1, ?2, ?3)",
            )?;
            for (i, cells) in rows.iter().enumerate() {
                let json = serde_json::to_string(cells)?;
                ins_row.execute(params![(i + 1) as i64, json, now])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn record_log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }

    fn read_log(&self) -> AppResult<Option<Vec<LogEntry>>> {
        log::load_log(&self.conn).map(Some)
    }
}
