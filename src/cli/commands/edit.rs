use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, RecordPatch};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        no,
        date,
        name,
        ktp,
        purpose,
        guests,
        badge,
        time_in,
        time_out,
        status,
    } = cmd
    {
        let patch = RecordPatch {
            date: date.clone(),
            name: name.clone(),
            id_number: ktp.clone(),
            purpose: purpose.clone(),
            guests: *guests,
            badge_id: badge.clone(),
            time_in: time_in.clone(),
            time_out: time_out.clone(),
            status: status.clone(),
        };

        let mut sheet = store::open(cfg)?;
        let rec = EditLogic::apply(sheet.as_mut(), cfg, *no, &patch)?;

        success(format!(
            "Row {} updated: {} | {} | in {} | out {} | {}",
            rec.sequence_number,
            rec.full_name,
            rec.visit_date,
            rec.time_in,
            rec.time_out,
            rec.status
        ));
    }

    Ok(())
}
