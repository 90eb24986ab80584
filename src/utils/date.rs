use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY` year.
pub fn parse_year(s: &str) -> AppResult<i32> {
    let s = s.trim();
    if !YEAR_RE.is_match(s) {
        return Err(AppError::InvalidYear(s.to_string()));
    }
    s.parse::<i32>()
        .map_err(|_| AppError::InvalidYear(s.to_string()))
}

/// First and last day (inclusive) of a `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
/// period.
pub fn bounds_of_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(first) = parse_date(&format!("{p}-01")) {
        return Ok((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if let Ok(year) = parse_year(p) {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let today = today();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;
    Ok((first, last_day_of_month(today.year(), today.month())?))
}

pub fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))
}
