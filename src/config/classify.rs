//! Structural classification of a raw configuration value

use serde_json::Value;
use std::fmt;

/// Structural problem found in a configuration value
///
/// Rules are checked in declaration order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The value is not an array
    NotArray,
    /// The array has no entries
    Empty,
    /// Some entry is not an object
    NotObject,
    /// Some entry's `path` is neither a string nor an array of strings
    NotString,
}

impl ConfigError {
    /// Stable identifier, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigError::NotArray => "notArray",
            ConfigError::Empty => "empty",
            ConfigError::NotObject => "notObject",
            ConfigError::NotString => "notString",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a configuration value. `None` means the value is valid.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use size_limit::config::{classify, ConfigError};
///
/// assert_eq!(classify(&json!([])), Some(ConfigError::Empty));
/// assert_eq!(classify(&json!({})), Some(ConfigError::NotArray));
/// assert_eq!(classify(&json!([{ "path": 1 }])), Some(ConfigError::NotString));
/// assert_eq!(classify(&json!([{ "path": "a" }])), None);
/// ```
pub fn classify(config: &Value) -> Option<ConfigError> {
    let Some(entries) = config.as_array() else {
        return Some(ConfigError::NotArray);
    };
    if entries.is_empty() {
        return Some(ConfigError::Empty);
    }
    if entries.iter().any(|entry| !entry.is_object()) {
        return Some(ConfigError::NotObject);
    }
    if entries.iter().any(|entry| !is_path_valid(entry.get("path"))) {
        return Some(ConfigError::NotString);
    }
    None
}

fn is_path_valid(path: Option<&Value>) -> bool {
    match path {
        Some(Value::String(_)) => true,
        Some(Value::Array(items)) => items.iter().all(Value::is_string),
        _ => false,
    }
}
