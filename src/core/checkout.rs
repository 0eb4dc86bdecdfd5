use crate::config::Config;
use crate::core::{VisitorLedger, audit, require};
use crate::errors::{AppError, AppResult};
use crate::models::{VisitStatus, VisitorRecord};
use crate::store::SheetStore;
use crate::utils::time::{current_time, format_time};

pub struct CheckOutLogic;

impl CheckOutLogic {
    /// Mark the most recent IN record of `name` (and `id_number`, when
    /// given) as OUT.
    ///
    /// Names are not unique: when the same person is inside twice, the later
    /// row wins. `time_out` defaults to the current clock time.
    pub fn apply(
        store: &mut dyn SheetStore,
        cfg: &Config,
        name: &str,
        id_number: Option<&str>,
        time_out: Option<&str>,
    ) -> AppResult<VisitorRecord> {
        require(name, "name")?;

        let out_time = match time_out.map(str::trim) {
            Some(t) if !t.is_empty() => format_time(t),
            _ => current_time(cfg.utc_offset_hours),
        };

        let mut ledger = VisitorLedger::try_load(store)?;

        let pos = ledger
            .update(
                |r| {
                    r.status.is_in()
                        && match id_number {
                            Some(id) => r.same_identity(name, id),
                            None => r.name_matches(name),
                        }
                },
                |r| {
                    r.status = VisitStatus::Out;
                    r.time_out = out_time.clone();
                },
            )
            .map_err(|_| {
                AppError::RecordNotFound(match id_number {
                    Some(id) => format!("no visitor '{name}' (KTP {id}) currently checked in"),
                    None => format!("no visitor '{name}' currently checked in"),
                })
            })?;

        ledger.persist(store)?;

        let stored = ledger
            .get(pos)
            .cloned()
            .ok_or_else(|| AppError::Other("checked-out row vanished during persist".into()))?;

        audit(
            store,
            "checkout",
            &stored.full_name,
            &format!(
                "#{} {} out at {}",
                stored.sequence_number, stored.full_name, stored.time_out
            ),
        );

        Ok(stored)
    }
}
