//! Tag values supplied from outside the program: YAML value files and
//! `key=value` assignments.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{io_err, ConfigError};

/// Load a YAML mapping of tag name → value.
///
/// Scalars are stringified, `null` becomes the empty string, and anything
/// nested is rejected with `ConfigError::InvalidValue`.
pub fn load_values_at(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let raw: BTreeMap<String, Value> =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    raw.into_iter()
        .map(|(key, value)| {
            let text = scalar_to_string(&value)
                .ok_or_else(|| ConfigError::InvalidValue { key: key.clone() })?;
            Ok((key, text))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Split `key=value` on the first `=`. The value may be empty; the key may not.
pub fn parse_assignment(input: &str) -> Result<(String, String), ConfigError> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(ConfigError::InvalidAssignment {
            input: input.to_owned(),
        }),
    }
}
