//! Time utilities: parsing HH:MM and formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Stored times are `HH:MM`; older rows may carry seconds.
pub fn parse_db_time(t: &str) -> Option<NaiveTime> {
    parse_time(t).or_else(|| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn format_hours(hours: i64) -> String {
    if hours.abs() == 1 {
        format!("{} hour", hours)
    } else {
        format!("{} hours", hours)
    }
}
