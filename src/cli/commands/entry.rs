use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_required_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EntryAction::Add {
                employee_id,
                date: d,
                start,
                end,
            } => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                let start = parse_required_time(start)?;
                let end = parse_required_time(end)?;
                EntryLogic::add(&mut pool, cfg, *employee_id, d, start, end)?;
            }
            EntryAction::List {
                employee_id,
                period,
            } => {
                let (from, to) = match period {
                    Some(p) => date::bounds_of_period(p)?,
                    None => date::current_month_bounds()?,
                };
                EntryLogic::list(&mut pool, *employee_id, from, to)?;
            }
            EntryAction::Del {
                employee_id,
                date: d,
            } => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                EntryLogic::delete(&mut pool, *employee_id, d)?;
            }
        }
    }

    Ok(())
}
