use super::model::WageExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the wage rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[WageExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
