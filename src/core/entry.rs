use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, load_employee, load_entries_between, upsert_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;
use chrono::{NaiveDate, NaiveTime};

pub struct EntryLogic;

impl EntryLogic {
    /// Record the start/end times of one employee for one day.
    ///
    /// An existing entry for that day is replaced. `end` may not be earlier
    /// than `start`; `00:00`/`00:00` records an explicit day off.
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        employee_id: i64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<Entry> {
        let emp = load_employee(&pool.conn, employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;
        if emp.is_admin(cfg.admin_id, &cfg.admin_marker) {
            return Err(AppError::Validation(
                "entries cannot be logged for the administrator".into(),
            ));
        }

        if end < start {
            return Err(AppError::InvalidTime(format!(
                "END ({}) must not be earlier than START ({}).",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }

        let entry = Entry::new(0, employee_id, date, start, end);
        upsert_entry(&pool.conn, &entry)?;

        ttlog_quiet(
            &pool.conn,
            "entry_add",
            &format!("{}@{}", employee_id, entry.date_str()),
            &format!("{} → {}", entry.start_str(), entry.end_str()),
        );
        success(format!(
            "Entry saved for {} on {}: {} → {} ({}).",
            emp.full_name(),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            format_hours(entry.working_hours())
        ));
        Ok(entry)
    }

    pub fn list(
        pool: &mut DbPool,
        employee_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Entry>> {
        let emp = load_employee(&pool.conn, employee_id)?
            .ok_or(AppError::EmployeeNotFound(employee_id))?;
        let entries = load_entries_between(&pool.conn, employee_id, &from, &to)?;

        if entries.is_empty() {
            info(format!(
                "No entries for {} between {} and {}.",
                emp.full_name(),
                from,
                to
            ));
            return Ok(entries);
        }

        println!("📅 Entries of {} ({} → {}):\n", emp.full_name(), from, to);
        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Date", 10),
            Column::new("Start", 5),
            Column::new("End", 5),
            Column::new("Hours", 5),
        ]);
        let mut total = 0;
        for e in &entries {
            total += e.working_hours();
            table.add_row(vec![
                e.id.to_string(),
                e.date_str(),
                e.start_str(),
                e.end_str(),
                e.working_hours().to_string(),
            ]);
        }
        print!("{}", table.render());
        println!("\nTotal: {}", format_hours(total));
        Ok(entries)
    }

    pub fn delete(pool: &mut DbPool, employee_id: i64, date: NaiveDate) -> AppResult<()> {
        let n = delete_entry(&pool.conn, employee_id, &date)?;
        if n == 0 {
            return Err(AppError::Validation(format!(
                "no entry for employee {} on {}",
                employee_id, date
            )));
        }

        ttlog_quiet(
            &pool.conn,
            "entry_del",
            &format!("{}@{}", employee_id, date),
            "Entry deleted",
        );
        info(format!("Deleted entry of employee {} on {}.", employee_id, date));
        Ok(())
    }
}
