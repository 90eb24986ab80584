use super::model::WageExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write the wage rows as CSV, with a header line.
pub fn write_csv(path: &Path, rows: &[WageExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
