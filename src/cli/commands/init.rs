use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::VisitorLedger;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the visitor sheet (SQLite database or CSV file) with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    let mut cfg = cfg.clone();

    if !cli.test {
        // a relative --db name lives next to the config file
        if let Some(custom) = &cli.db
            && !Path::new(custom).is_absolute()
        {
            let resolved = Config::config_dir().join(custom);
            cfg.override_storage(&resolved.to_string_lossy());
        }

        cfg.save()?;
        info(format!("Config file : {}", Config::config_file().display()));
    }

    info(format!("Storage     : {}", cfg.storage_path()));

    //
    // 2️⃣ APERTURA STORE (lo schema SQLite viene creato qui)
    //
    let mut sheet = store::open(&cfg)?;

    //
    // 3️⃣ HEADER ROW, solo se il foglio è vuoto
    //
    if sheet.read_all_rows()?.is_empty() {
        VisitorLedger::new().persist(sheet.as_mut())?;
    }

    //
    // 4️⃣ LOG INTERNO (non bloccante)
    //
    crate::core::audit(
        sheet.as_ref(),
        "init",
        cfg.storage_path(),
        "Visitor sheet initialized",
    );

    success(format!("Visitor sheet initialized at {}", cfg.storage_path()));
    Ok(())
}
