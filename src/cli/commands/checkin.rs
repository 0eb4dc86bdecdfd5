use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckIn, CheckInLogic};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Register a visitor arriving.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        name,
        ktp,
        badge,
        time_in,
        purpose,
        guests,
        date,
    } = cmd
    {
        let input = CheckIn {
            name: name.clone(),
            id_number: ktp.clone(),
            badge_id: badge.clone(),
            time_in: time_in.clone(),
            purpose: purpose.clone(),
            guests: *guests,
            date: date.clone(),
        };

        let mut sheet = store::open(cfg)?;
        let rec = CheckInLogic::apply(sheet.as_mut(), cfg, &input)?;

        success(format!(
            "#{} {} checked in at {} on {} (badge {})",
            rec.sequence_number, rec.full_name, rec.time_in, rec.visit_date, rec.visitor_badge_id
        ));
    }

    Ok(())
}
