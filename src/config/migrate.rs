//! Configuration file upgrades: detect keys missing from an older
//! `wakeup.conf` and fill them in with their default values, keeping
//! everything the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Names of the keys the file at `path` does not define.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty → file untouched).
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
        tracing::info!(path = %path.display(), ?added, "configuration migrated");
    }

    Ok(added)
}
