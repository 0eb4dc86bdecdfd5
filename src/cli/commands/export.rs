use crate::cli::commands::list::parse_status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::query::RecordFilter;
use crate::errors::AppResult;
use crate::store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        status,
        ktp,
        force,
    } = cmd
    {
        let filter = RecordFilter {
            range: range.clone(),
            status: parse_status(status.as_deref())?,
            id_number: ktp.clone(),
            name: None,
        };

        let sheet = store::open(cfg)?;
        ExportLogic::export(sheet.as_ref(), cfg, *format, file, &filter, *force)?;
    }
    Ok(())
}
