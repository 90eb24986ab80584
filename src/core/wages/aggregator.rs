use super::WageMap;
use super::partition::{default_workers, partition};
use super::state::PipelineState;
use super::{producer, reducer};
use crate::config::Config;
use crate::core::payroll::PayrollSource;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::salary::DEFAULT_SALARY_PER_HOUR;
use crate::utils::date::parse_year;
use std::any::Any;
use std::thread;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AggregationOptions {
    pub workers: usize,
    pub salary_per_hour: i64,
    pub admin_id: i64,
    pub admin_marker: String,
    /// Stop the remaining producers once an error is captured.
    pub fail_fast: bool,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            salary_per_hour: DEFAULT_SALARY_PER_HOUR,
            admin_id: 1,
            admin_marker: "Admin".to_string(),
            fail_fast: false,
        }
    }
}

impl From<&Config> for AggregationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            workers: cfg.workers.unwrap_or_else(default_workers).max(1),
            salary_per_hour: cfg.salary_per_hour,
            admin_id: cfg.admin_id,
            admin_marker: cfg.admin_marker.clone(),
            fail_fast: cfg.fail_fast,
        }
    }
}

/// Wages computed so far plus the first error captured by a worker.
#[derive(Debug)]
pub struct AggregationOutcome {
    /// Employees read when the run started, admin included.
    pub roster: Vec<Employee>,
    pub wages: WageMap,
    pub error: Option<AppError>,
}

impl AggregationOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> AppResult<WageMap> {
        match self.error {
            None => Ok(self.wages),
            Some(e) => Err(AppError::Aggregation(Box::new(e))),
        }
    }
}

pub struct YearlyWageAggregator<'a, S: PayrollSource + ?Sized> {
    source: &'a S,
    options: AggregationOptions,
}

impl<'a, S: PayrollSource + ?Sized> YearlyWageAggregator<'a, S> {
    pub fn new(source: &'a S, options: AggregationOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Yearly wages of every non-admin employee.
    ///
    /// A worker failure is reported as `AppError::Aggregation` once every
    /// thread has joined.
    pub fn aggregate(&self, year: &str) -> AppResult<WageMap> {
        self.aggregate_partial(year)?.into_result()
    }

    /// Like [`aggregate`](Self::aggregate) but keeps the partial map when a
    /// worker fails. Errors raised before any thread starts (bad year,
    /// roster fetch) are returned directly.
    pub fn aggregate_partial(&self, year: &str) -> AppResult<AggregationOutcome> {
        let year = parse_year(year)?;
        let roster = self.source.employees()?;
        let chunks = partition(roster.len(), self.options.workers);

        info!(
            year,
            employees = roster.len(),
            workers = chunks.len(),
            "aggregating yearly wages"
        );

        let state = PipelineState::new(chunks.len(), self.options.fail_fast);
        let source = self.source;
        let options = &self.options;

        let wages = thread::scope(|s| {
            let state = &state;
            let producers: Vec<_> = chunks
                .iter()
                .map(|range| {
                    let chunk = &roster[range.clone()];
                    s.spawn(move || producer::run(source, state, year, chunk, options))
                })
                .collect();

            let reducer_handle = s.spawn(move || reducer::run(state));

            for handle in producers {
                if let Err(payload) = handle.join() {
                    state.record_error(AppError::WorkerPanic(panic_message(payload.as_ref())));
                }
            }

            match reducer_handle.join() {
                Ok(wages) => wages,
                Err(payload) => {
                    state.record_error(AppError::WorkerPanic(panic_message(payload.as_ref())));
                    WageMap::new()
                }
            }
        });

        let error = state.take_error();
        if error.is_some() {
            warn!(year, computed = wages.len(), "yearly wages are partial");
        }

        Ok(AggregationOutcome {
            roster,
            wages,
            error,
        })
    }
}

/// Entry point used by the `wages` command.
pub fn get_yearly_wages_of_all_employees<S: PayrollSource + ?Sized>(
    source: &S,
    year: &str,
    options: AggregationOptions,
) -> AppResult<WageMap> {
    YearlyWageAggregator::new(source, options).aggregate(year)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
