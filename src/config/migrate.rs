//! Configuration file upgrades: detect and fill keys added in newer versions.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

/// Keys known to this version but missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
///
/// Returns `Ok(true)` when the file was rewritten.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut changed = false;

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            info(format!(
                "Adding missing config key '{}'",
                k.as_str().unwrap_or_default()
            ));
            current.insert(k, v);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        success(format!("Configuration migrated: {}", path.display()));
    }

    Ok(changed)
}
