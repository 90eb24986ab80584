use super::{employee::Employee, entry::Entry, period::Period};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Default rate in CHF per hour.
pub const DEFAULT_SALARY_PER_HOUR: i64 = 38;

/// Daily wage view: one entry, the owning employee and a rate.
///
/// The entry and employee are owned snapshots, released together when the
/// salary is dropped.
#[derive(Debug, Clone, Serialize)]
pub struct Salary {
    pub entry: Entry,
    pub employee: Employee,
    pub salary_per_hour: i64,
}

impl Salary {
    pub fn new(entry: Entry, employee: Employee, salary_per_hour: i64) -> Self {
        Self {
            entry,
            employee,
            salary_per_hour,
        }
    }

    pub fn employee_id(&self) -> i64 {
        self.employee.id
    }

    pub fn working_hours(&self) -> i64 {
        self.entry.working_hours()
    }

    pub fn wages(&self) -> AppResult<i64> {
        self.working_hours()
            .checked_mul(self.salary_per_hour)
            .ok_or(AppError::WageOverflow(self.employee.id))
    }

    /// One salary per day of `period` from `start`.
    /// Days missing from `entries` count as empty (0 hours).
    pub fn for_period(
        employee: &Employee,
        entries: &HashMap<NaiveDate, Entry>,
        start: NaiveDate,
        period: Period,
        salary_per_hour: i64,
    ) -> AppResult<Vec<Salary>> {
        let dates = period.dates_from(start)?;
        Ok(dates
            .into_iter()
            .map(|d| {
                let entry = entries
                    .get(&d)
                    .cloned()
                    .unwrap_or_else(|| Entry::empty(employee.id, d));
                Salary::new(entry, employee.clone(), salary_per_hour)
            })
            .collect())
    }
}

/// Sum of the wages of a batch.
pub fn total_wages(salaries: &[Salary]) -> AppResult<i64> {
    salaries.iter().try_fold(0i64, |acc, s| {
        acc.checked_add(s.wages()?)
            .ok_or(AppError::WageOverflow(s.employee.id))
    })
}
