use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::salary::SalaryLogic;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Salary {
        employee_id,
        date: d,
        period,
        rate,
    } = cmd
    {
        let start = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        let store = SqliteStore::new(&cfg.database);

        SalaryLogic::show(
            &store,
            cfg,
            *employee_id,
            start,
            *period,
            rate.unwrap_or(cfg.salary_per_hour),
        )?;
    }

    Ok(())
}
