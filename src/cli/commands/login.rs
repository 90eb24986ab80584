use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{LoginLogic, Role};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match LoginLogic::check(&pool, cfg, email, password)? {
            Some(Role::Admin) => success("Logged in as administrator."),
            Some(Role::Employee(emp)) => success(format!(
                "Logged in as {} (employee {}).",
                emp.full_name(),
                emp.id
            )),
            None => {
                return Err(AppError::Validation("invalid email or password".into()));
            }
        }
    }

    Ok(())
}
