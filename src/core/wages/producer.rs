use super::aggregator::AggregationOptions;
use super::state::{PipelineState, WorkerGuard, YearlyBatch};
use crate::core::payroll::PayrollSource;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::period::Period;
use crate::models::salary::Salary;
use chrono::NaiveDate;
use tracing::{debug, error};

/// Compute yearly batches for `chunk` and hand them to the reducer.
///
/// The first failure stops this producer and is captured in `state`; other
/// producers keep going unless fail-fast cancellation is enabled.
pub fn run<S: PayrollSource + ?Sized>(
    source: &S,
    state: &PipelineState,
    year: i32,
    chunk: &[Employee],
    options: &AggregationOptions,
) {
    let _guard = WorkerGuard::new(state);

    for employee in chunk {
        if employee.is_admin(options.admin_id, &options.admin_marker) {
            continue;
        }
        if state.is_cancelled() {
            debug!(employee_id = employee.id, "producer cancelled");
            break;
        }

        debug!(employee_id = employee.id, "start processing employee");

        match yearly_batch(source, employee.id, year, options.salary_per_hour) {
            Ok(batch) => {
                state.push(batch);
                debug!(employee_id = employee.id, "batch queued");
            }
            Err(e) => {
                error!(employee_id = employee.id, error = %e, "failed to compute yearly salaries");
                state.record_error(e);
                break;
            }
        }
    }
}

/// Concatenate the twelve monthly salary lists of `employee_id`.
pub fn yearly_batch<S: PayrollSource + ?Sized>(
    source: &S,
    employee_id: i64,
    year: i32,
    salary_per_hour: i64,
) -> AppResult<YearlyBatch> {
    let mut salaries: Vec<Salary> = Vec::new();

    for month in 1..=12 {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-01")))?;
        let monthly =
            source.salaries_of_employee(employee_id, start, Period::Monthly, salary_per_hour)?;
        salaries.extend(monthly);
    }

    Ok(YearlyBatch {
        employee_id,
        salaries,
    })
}
