use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

/// Aggregation granularity for salary queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Period {
    Daily,   // 0
    Weekly,  // 1
    Monthly, // 2
}

impl Period {
    /// Number of consecutive days covered, counting the start date.
    /// Monthly is the 30-day approximation.
    pub fn days(&self) -> u64 {
        match self {
            Period::Daily => 1,
            Period::Weekly => 7,
            Period::Monthly => 30,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Period::Daily => 0,
            Period::Weekly => 1,
            Period::Monthly => 2,
        }
    }

    pub fn from_code(code: i32) -> AppResult<Self> {
        match code {
            0 => Ok(Period::Daily),
            1 => Ok(Period::Weekly),
            2 => Ok(Period::Monthly),
            other => Err(AppError::InvalidPeriod(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Every date of the period starting at `start`, in ascending order.
    pub fn dates_from(&self, start: NaiveDate) -> AppResult<Vec<NaiveDate>> {
        (0..self.days())
            .map(|offset| {
                start
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(|| AppError::InvalidDate(format!("{start} + {offset} days")))
            })
            .collect()
    }

    /// Last date covered by the period (inclusive).
    pub fn end_date(&self, start: NaiveDate) -> AppResult<NaiveDate> {
        start
            .checked_add_days(Days::new(self.days() - 1))
            .ok_or_else(|| AppError::InvalidDate(format!("{start} + {} days", self.days() - 1)))
    }
}
