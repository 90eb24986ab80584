// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// - missing file → Ok (parent folders are created)
/// - existing file and `force` → Ok
/// - existing file without `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        return Ok(());
    }

    if force {
        info(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
