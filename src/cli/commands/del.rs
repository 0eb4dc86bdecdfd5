use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::VisitorLedger;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { no, yes } = cmd {
        let mut sheet = store::open(cfg)?;

        //
        // Confirmation prompt, showing the row about to go
        //
        if !*yes {
            let ledger = VisitorLedger::try_load(sheet.as_ref())?;
            let rec = no
                .checked_sub(1)
                .and_then(|p| ledger.get(p))
                .ok_or(AppError::InvalidPosition(*no))?;

            let prompt = format!(
                "Delete row {} ({}, KTP {}, {})? This action is irreversible.",
                no, rec.full_name, rec.id_number, rec.visit_date
            );

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let removed = DeleteLogic::apply(sheet.as_mut(), *no)?;
        success(format!(
            "Row {} ({}) has been deleted.",
            no, removed.full_name
        ));
    }

    Ok(())
}
