use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::VisitorLedger;
use crate::core::query::{QueryLogic, RecordFilter};
use crate::errors::{AppError, AppResult};
use crate::models::columns::CANONICAL_COLUMNS;
use crate::models::{VisitStatus, VisitorRecord};
use crate::store;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        today,
        status,
        name,
        inside,
    } = cmd
    {
        let sheet = store::open(cfg)?;

        // lettura tollerante: un foglio irraggiungibile appare vuoto
        let mut ledger = VisitorLedger::load(sheet.as_ref());
        ledger.clean();

        let range = if *today {
            Some(date::today(cfg.utc_offset_hours).format("%Y-%m-%d").to_string())
        } else {
            range.clone()
        };

        let status = if *inside {
            Some(VisitStatus::In)
        } else {
            parse_status(status.as_deref())?
        };

        let filter = RecordFilter {
            range,
            status,
            id_number: None,
            name: name.clone(),
        };

        let records = QueryLogic::filter(ledger.records(), cfg, &filter)?;

        header(format!("Visitors ({} of {})", records.len(), ledger.len()));
        print_records(&records);
    }
    Ok(())
}

/// Parse an optional --status flag.
pub(crate) fn parse_status(s: Option<&str>) -> AppResult<Option<VisitStatus>> {
    match s {
        None => Ok(None),
        Some(v) => VisitStatus::parse(v)
            .map(Some)
            .ok_or_else(|| AppError::InvalidStatus(v.to_string())),
    }
}

/// Render records as a table in canonical column order.
pub(crate) fn print_records(records: &[VisitorRecord]) {
    if records.is_empty() {
        info("No visitors to show.");
        return;
    }

    let mut table = Table::with_headers(&CANONICAL_COLUMNS);

    for r in records {
        let mut cells = r.to_cells();
        // le celle "-" in grigio, lo stato colorato
        for cell in cells.iter_mut().take(9).skip(1) {
            *cell = colorize_optional(cell);
        }
        cells[9] = colorize_status(r.status);
        table.add_row(cells);
    }

    print!("{}", table.render());
}
