//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid year: {0} (expected YYYY)")]
    InvalidYear(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Wage aggregation
    // ---------------------------
    #[error("Wage aggregation failed: {0}")]
    Aggregation(Box<AppError>),

    #[error("Wage overflow while summing employee {0}")]
    WageOverflow(i64),

    #[error("Worker thread panicked: {0}")]
    WorkerPanic(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Unwrap an aggregation error down to the error captured in the worker.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Aggregation(inner) => inner.root_cause(),
            other => other,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
