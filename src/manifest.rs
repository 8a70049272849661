use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{BumpVersionError, Result};

/// Reads the current version from a JSON manifest.
///
/// Falls back to "0.0.0" when the manifest has no `version` key, mirroring a
/// project that has never been released. A `version` that is present but not
/// a string is an error.
///
/// # Returns
/// * `Ok(String)` - The version string from the manifest
/// * `Err` - If the file cannot be read, is not valid JSON, or holds a
///   non-string `version`
pub fn read_version(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BumpVersionError::manifest(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let data: Value = serde_json::from_str(&raw)?;

    match data.get("version") {
        None => Ok("0.0.0".to_string()),
        Some(Value::String(version)) => Ok(version.clone()),
        Some(other) => Err(BumpVersionError::manifest(format!(
            "'version' in '{}' is not a string: {}",
            path.display(),
            other
        ))),
    }
}

/// Writes a new version into a JSON manifest.
///
/// Only the `version` key is touched; every other key passes through with its
/// original order. The document is rewritten pretty-printed with 2-space
/// indentation and a trailing newline.
///
/// # Returns
/// * `Ok(())` - Manifest rewritten
/// * `Err` - If the file cannot be read, is not a JSON object, or cannot be written
pub fn write_version(path: &Path, new_version: &str) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BumpVersionError::manifest(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let mut data: Value = serde_json::from_str(&raw)?;

    match data {
        Value::Object(ref mut map) => {
            map.insert(
                "version".to_string(),
                Value::String(new_version.to_string()),
            );
        }
        _ => {
            return Err(BumpVersionError::manifest(format!(
                "'{}' is not a JSON object",
                path.display()
            )));
        }
    }

    let mut rendered = serde_json::to_string_pretty(&data)?;
    rendered.push('\n');
    fs::write(path, rendered)?;

    Ok(())
}
