//! A CSV file standing in for the remote spreadsheet.

use crate::errors::AppResult;
use crate::models::columns::Row;
use crate::store::SheetStore;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SheetStore for CsvSheet {
    fn read_all_rows(&self) -> AppResult<Vec<Row>> {
        // file mancante → foglio vuoto
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let header: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

        let mut out = Vec::new();
        for record in rdr.records() {
            // righe malformate: scartate in silenzio
            let Ok(record) = record else {
                continue;
            };
            let row: Row = header
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect();
            out.push(row);
        }
        Ok(out)
    }

    fn overwrite_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
