//! Field checks applied before anything reaches the database.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s-]+$").expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

pub const MIN_PASSWORD_LEN: usize = 4;

pub fn validate_name(field: &str, value: &str) -> AppResult<()> {
    if NAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} may only contain letters, spaces and hyphens: '{value}'"
        )))
    }
}

pub fn validate_email(value: &str) -> AppResult<()> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("invalid email address: '{value}'")))
    }
}

pub fn validate_password(value: &str) -> AppResult<()> {
    if value.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )))
    }
}
