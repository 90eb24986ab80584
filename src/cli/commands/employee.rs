use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                last_name,
                first_name,
                email,
                password,
            } => {
                EmployeeLogic::add(&mut pool, cfg, last_name, first_name, email, password)?;
            }
            EmployeeAction::List => EmployeeLogic::list(&mut pool, cfg)?,
            EmployeeAction::Del { id } => EmployeeLogic::delete(&mut pool, cfg, *id)?,
        }
    }

    Ok(())
}
