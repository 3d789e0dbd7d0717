//! Expansion of configuration entries into measurement requests

use super::glob::expand;
use super::MeasurementRequest;
use crate::config::{classify, LimitSpec, LoadedConfig, ProjectManifest, RawEntry};
use crate::error::SizeLimitError;
use crate::fmt::{capitalize, parse_size};
use rayon::prelude::*;
use serde_json::Value;
use std::path::Path;

/// Builds one request per configuration entry
///
/// # Examples
///
/// ```no_run
/// use size_limit::config::{ConfigLoader, ProjectManifest};
/// use size_limit::request::RequestBuilder;
/// use std::path::Path;
///
/// let cwd = Path::new(".");
/// let loaded = ConfigLoader::resolve(cwd)?;
/// let manifest = ProjectManifest::find(cwd)?.map(|(_, m)| m);
/// let requests = RequestBuilder::new(&loaded, manifest.as_ref()).build()?;
/// println!("{} check(s)", requests.len());
/// # Ok::<(), size_limit::error::SizeLimitError>(())
/// ```
pub struct RequestBuilder<'a> {
    loaded: &'a LoadedConfig,
    manifest: Option<&'a ProjectManifest>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a builder for a located configuration
    pub fn new(loaded: &'a LoadedConfig, manifest: Option<&'a ProjectManifest>) -> Self {
        Self { loaded, manifest }
    }

    /// Validate the configuration and expand every entry
    ///
    /// Entries expand in parallel. Results keep configuration order and
    /// the first failing entry fails the whole build.
    pub fn build(&self) -> Result<Vec<MeasurementRequest>, SizeLimitError> {
        if let Some(code) = classify(&self.loaded.config) {
            log::debug!("Configuration rejected: {}", code);
            return Err(SizeLimitError::InvalidConfig {
                origin: self.loaded.source,
                code,
            });
        }

        let entries = self.loaded.config.as_array().map_or(&[][..], Vec::as_slice);
        entries
            .par_iter()
            .enumerate()
            .map(|(index, value)| self.build_entry(index, value))
            .collect()
    }

    fn build_entry(&self, index: usize, value: &Value) -> Result<MeasurementRequest, SizeLimitError> {
        let entry: RawEntry =
            serde_json::from_value(value.clone()).map_err(|e| SizeLimitError::InvalidEntry {
                index: index + 1,
                reason: capitalize(&e.to_string()),
            })?;

        let base = self.loaded.base_dir();
        let patterns = entry.path.patterns();
        if patterns.is_empty() {
            return Err(SizeLimitError::InvalidEntry {
                index: index + 1,
                reason: "The `path` list must not be empty".to_string(),
            });
        }
        let mut files = expand(&patterns, base)?;
        if files.is_empty() {
            log::debug!("No matches for {:?}, using paths as written", patterns);
            files = patterns;
        }

        let name = entry.name.clone().unwrap_or_else(|| files.join(", "));
        let limit = parse_limit(entry.limit.as_ref(), &name)?;

        Ok(MeasurementRequest {
            full: files.iter().map(|file| base.join(file)).collect(),
            webpack: entry.webpack != Some(false),
            gzip: entry.gzip != Some(false),
            limit,
            name: Some(name),
            bundle: self.manifest.and_then(|m| m.name.clone()),
            ignore: self.manifest.map(ProjectManifest::peer_names).unwrap_or_default(),
            config: entry.config.as_deref().map(|config| base.join(Path::new(config))),
        })
    }
}

fn parse_limit(limit: Option<&LimitSpec>, entry: &str) -> Result<Option<u64>, SizeLimitError> {
    match limit {
        None => Ok(None),
        Some(LimitSpec::Bytes(bytes)) => Ok(Some(*bytes)),
        Some(LimitSpec::Text(text)) => parse_size(text)
            .map(Some)
            .ok_or_else(|| SizeLimitError::InvalidLimit {
                value: text.clone(),
                entry: entry.to_string(),
            }),
    }
}
