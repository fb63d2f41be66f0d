use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Platform default editor: $EDITOR, $VISUAL, then notepad / nano.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", requested));
                return Ok(());
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                ));
            }
            _ => {}
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run '{}': {}", default_editor, e)))?;

        if status.success() {
            success(format!("Configuration file edited using '{}'", default_editor));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, status
            )))
        }
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning("No configuration file yet, run `wakeup init`");
            return Ok(());
        }

        let missing = migrate::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `wakeup config --migrate` to add them with default values");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning("No configuration file yet, run `wakeup init`");
            return Ok(());
        }

        let added = migrate::migrate_missing_fields(path)?;
        if added.is_empty() {
            info("Configuration already up to date");
        } else {
            success(format!("Added fields: {}", added.join(", ")));
        }
        Ok(())
    }
}
