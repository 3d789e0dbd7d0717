//! Configuration discovery and parsing
//!
//! Walks from the working directory up to the filesystem root. In each
//! directory the `size-limit` key of package.json wins over a dedicated
//! `.size-limit` file. Executable config sources are never loaded.

use super::file::{
    ConfigSource, LoadedConfig, CONFIG_FILE_NAMES, MANIFEST_FILE_NAME, MANIFEST_KEY,
};
use crate::error::SizeLimitError;
use crate::fmt::capitalize;
use crate::infra::{FileSystem, RealFileSystem};
use regex::Regex;
use serde_json::Value;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

static LOCATION_RE: OnceLock<Regex> = OnceLock::new();

/// Handles locating and parsing the configuration document
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the configuration for a project rooted at or below `cwd`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use size_limit::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let loaded = ConfigLoader::resolve(Path::new("."))?;
    /// println!("Using {}", loaded.filepath.display());
    /// # Ok::<(), size_limit::error::SizeLimitError>(())
    /// ```
    pub fn resolve(cwd: &Path) -> Result<LoadedConfig, SizeLimitError> {
        Self::resolve_with_fs(cwd, &RealFileSystem)
    }

    /// Find the configuration with a custom filesystem implementation
    pub fn resolve_with_fs<FS: FileSystem>(
        cwd: &Path,
        fs: &FS,
    ) -> Result<LoadedConfig, SizeLimitError> {
        for dir in cwd.ancestors() {
            let manifest_path = dir.join(MANIFEST_FILE_NAME);
            if let Some(contents) = read_optional(fs, &manifest_path)? {
                let mut manifest = parse_manifest(&contents)?;
                if let Some(config) = manifest.get_mut(MANIFEST_KEY).map(Value::take) {
                    log::debug!("Using `{}` from {}", MANIFEST_KEY, manifest_path.display());
                    return Ok(LoadedConfig {
                        config,
                        filepath: manifest_path,
                        source: ConfigSource::Manifest,
                    });
                }
            }

            for name in CONFIG_FILE_NAMES {
                let path = dir.join(name);
                if let Some(contents) = read_optional(fs, &path)? {
                    let config = parse_config_file(&contents, &path, cwd)?;
                    log::debug!("Using config file {}", path.display());
                    return Ok(LoadedConfig {
                        config,
                        filepath: path,
                        source: ConfigSource::File,
                    });
                }
            }
        }

        Err(SizeLimitError::ConfigNotFound)
    }
}

fn read_optional<FS: FileSystem>(fs: &FS, path: &Path) -> Result<Option<String>, SizeLimitError> {
    match fs.read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        // Directories named like a config file are not configs
        Err(_) if !fs.is_file(path) => Ok(None),
        Err(e) => Err(SizeLimitError::io(
            format!("reading {}", path.display()),
            e,
        )),
    }
}

/// Parse package.json contents into a JSON value
pub(crate) fn parse_manifest(contents: &str) -> Result<Value, SizeLimitError> {
    serde_json::from_str(contents).map_err(|e| {
        let (reason, location) = split_location(&e.to_string());
        let message = match location {
            Some((line, column)) => {
                format!("{} in package.json at {}:{}", capitalize(&reason), line, column)
            }
            None => format!("{} in package.json", capitalize(&reason)),
        };
        SizeLimitError::ManifestParse { message }
    })
}

fn parse_config_file(contents: &str, path: &Path, cwd: &Path) -> Result<Value, SizeLimitError> {
    serde_yaml::from_str(contents).map_err(|e| {
        let (reason, location) = split_location(&e.to_string());
        let (line, column) = e
            .location()
            .map(|l| (l.line(), l.column()))
            .or(location)
            .unwrap_or((1, 1));
        SizeLimitError::ConfigParse {
            file: path
                .strip_prefix(cwd)
                .unwrap_or(path)
                .display()
                .to_string(),
            line,
            column,
            reason: capitalize(&reason),
        }
    })
}

/// Split a parser message into its reason and `line column` position
fn split_location(message: &str) -> (String, Option<(usize, usize)>) {
    let re = LOCATION_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"^(?s)(.*?) at line (\d+) column (\d+)(.*)$").expect("location regex is valid")
    });

    match re.captures(message) {
        Some(caps) => {
            let line = caps[2].parse().ok();
            let column = caps[3].parse().ok();
            let reason = format!("{}{}", &caps[1], &caps[4]);
            (reason, line.zip(column))
        }
        None => (message.to_string(), None),
    }
}
