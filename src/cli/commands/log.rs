use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do: use --print.");
            return Ok(());
        }

        let sheet = store::open(cfg)?;

        match sheet.read_log()? {
            None => info("This storage backend keeps no operation log."),
            Some(entries) if entries.is_empty() => info("Operation log is empty."),
            Some(entries) => {
                header("Operation log");
                let mut table = Table::with_headers(&["Date", "Operation", "Target", "Message"]);
                for e in entries {
                    table.add_row(vec![e.date, e.operation, e.target, e.message]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
