// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::WageExport;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `rows` to `path` in the requested format.
///
/// An existing file is only replaced when `force` is set.
pub fn write(format: ExportFormat, path: &str, rows: &[WageExport], force: bool) -> AppResult<()> {
    let p = Path::new(path);
    fs_utils::ensure_writable(p, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(p, rows)?,
        ExportFormat::Json => json::write_json(p, rows)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        p.display()
    ));
    Ok(())
}
