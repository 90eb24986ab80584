//! SQLite-backed payroll source used by the wage pipeline.

use crate::core::payroll::PayrollSource;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employee, load_employees, load_entries_between};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::entry::Entry;
use crate::models::period::Period;
use crate::models::salary::Salary;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Opens a fresh connection per call, so producer threads never share one.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    fn open(&self) -> AppResult<DbPool> {
        DbPool::new(&self.path).map_err(AppError::from)
    }
}

impl PayrollSource for SqliteStore {
    fn employees(&self) -> AppResult<Vec<Employee>> {
        let pool = self.open()?;
        load_employees(&pool.conn)
    }

    fn salaries_of_employee(
        &self,
        employee_id: i64,
        start: NaiveDate,
        period: Period,
        salary_per_hour: i64,
    ) -> AppResult<Vec<Salary>> {
        let pool = self.open()?;
        let employee =
            load_employee(&pool.conn, employee_id)?.ok_or(AppError::EmployeeNotFound(employee_id))?;

        let end = period.end_date(start)?;
        let entries: HashMap<NaiveDate, Entry> =
            load_entries_between(&pool.conn, employee_id, &start, &end)?
                .into_iter()
                .map(|e| (e.date, e))
                .collect();

        Salary::for_period(&employee, &entries, start, period, salary_per_hour)
    }
}
