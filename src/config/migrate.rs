use super::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Read the raw YAML mapping of a configuration file.
fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

/// Return the configuration keys absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(CONFIG_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .map(|k| k.to_string())
        .collect())
}

/// Add every missing key to the configuration file, using the values of
/// `current` (which already carries serde defaults for them).
///
/// Existing keys are never overwritten. Returns the keys that were added.
pub fn migrate_config_file(path: &Path, current: &Config) -> AppResult<Vec<String>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(current).map_err(|_| AppError::ConfigSave)?;

    for key in &missing {
        let k = Value::String(key.clone());
        if let Some(v) = defaults.get(key.as_str()) {
            map.insert(k, v.clone());
        }
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated: added {}",
        missing.join(", ")
    ));
    Ok(missing)
}
