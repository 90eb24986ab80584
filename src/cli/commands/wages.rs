use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::all_salaries::{AllSalariesLogic, WagesRequest};
use crate::db::SqliteStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Wages {
        year,
        workers,
        fail_fast,
        export,
        format,
        force,
    } = cmd
    {
        let store = SqliteStore::new(&cfg.database);
        let req = WagesRequest {
            workers: *workers,
            fail_fast: *fail_fast,
            export: export.as_ref().map(|path| (*format, path.clone())),
            force: *force,
        };

        AllSalariesLogic::run(&store, cfg, year, &req)?;
    }

    Ok(())
}
