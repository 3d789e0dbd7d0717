//! Configuration data structures

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Project manifest file name
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Key holding the configuration inside the manifest
pub const MANIFEST_KEY: &str = "size-limit";

/// Dedicated configuration file names, in lookup order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".size-limit", ".size-limit.json"];

/// Where a configuration document was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The `size-limit` key of package.json
    Manifest,
    /// A dedicated `.size-limit` file
    File,
}

/// A configuration document located on disk, not yet validated
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Raw configuration value
    pub config: Value,
    /// File the value was read from
    pub filepath: PathBuf,
    /// Kind of file the value came from
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Directory that relative paths in the config resolve against
    pub fn base_dir(&self) -> &Path {
        self.filepath.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// `path` of an entry: one pattern or several
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    /// Single pattern
    One(String),
    /// Ordered list of patterns
    Many(Vec<String>),
}

impl PathSpec {
    /// Patterns as an ordered list
    pub fn patterns(&self) -> Vec<String> {
        match self {
            PathSpec::One(pattern) => vec![pattern.clone()],
            PathSpec::Many(patterns) => patterns.clone(),
        }
    }
}

/// `limit` of an entry: human-readable text or a plain byte count
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LimitSpec {
    /// Byte count given as a number
    Bytes(u64),
    /// Text such as `"9 KB"`
    Text(String),
}

/// One user-authored configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    /// Files or glob patterns to measure
    pub path: PathSpec,

    /// Size budget
    #[serde(default)]
    pub limit: Option<LimitSpec>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Bundle before measuring (default true)
    #[serde(default)]
    pub webpack: Option<bool>,

    /// Measure gzipped size (default true)
    #[serde(default)]
    pub gzip: Option<bool>,

    /// Custom bundler configuration
    #[serde(default)]
    pub config: Option<String>,
}
