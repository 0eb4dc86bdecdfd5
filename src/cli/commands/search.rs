use crate::cli::commands::list::print_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::VisitorLedger;
use crate::core::query::QueryLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::header;

/// Visit history of one person, looked up by national ID number.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { ktp, name } = cmd {
        let sheet = store::open(cfg)?;
        let mut ledger = VisitorLedger::load(sheet.as_ref());
        ledger.clean();

        let visits = QueryLogic::history(ledger.records(), ktp, name.as_deref());

        header(format!("Visits for KTP {} ({})", ktp.trim(), visits.len()));
        print_records(&visits);
    }
    Ok(())
}
