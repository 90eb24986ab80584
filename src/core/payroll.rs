//! Data-access seam consumed by the wage computations.

use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::period::Period;
use crate::models::salary::Salary;
use chrono::NaiveDate;

/// Storage collaborator of the salary layer.
///
/// Implementations are shared by reference across producer threads, so they
/// must be `Sync`; every call may block on I/O and may fail.
pub trait PayrollSource: Sync {
    /// Full roster. Order is unspecified but must be stable during one run.
    fn employees(&self) -> AppResult<Vec<Employee>>;

    /// One daily salary per day of `period`, starting at `start`.
    fn salaries_of_employee(
        &self,
        employee_id: i64,
        start: NaiveDate,
        period: Period,
        salary_per_hour: i64,
    ) -> AppResult<Vec<Salary>>;
}
