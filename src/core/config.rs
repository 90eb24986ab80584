use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys the file is missing. Returns true when it is complete.
    pub fn check(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `init` first.",
                path.display()
            ));
            return Ok(false);
        }

        let missing = missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
            Ok(true)
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !migrate_config(path)? {
            success("Configuration already up to date.");
        }
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or(default_editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch '{}': {}", ed, e)))?;

        if status.success() {
            success(format!("Configuration file edited using '{}'", ed));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)))
        }
    }
}
