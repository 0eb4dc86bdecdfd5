use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkout::CheckOutLogic;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Register a visitor leaving.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout {
        name,
        ktp,
        time_out,
    } = cmd
    {
        let mut sheet = store::open(cfg)?;
        let rec = CheckOutLogic::apply(
            sheet.as_mut(),
            cfg,
            name,
            ktp.as_deref(),
            time_out.as_deref(),
        )?;

        success(format!(
            "#{} {} checked out at {}",
            rec.sequence_number, rec.full_name, rec.time_out
        ));
    }

    Ok(())
}
