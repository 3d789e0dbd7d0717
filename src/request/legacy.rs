//! Positional-argument mode: `size-limit [limit] <files...>`
//!
//! Bypasses configuration entirely. A leading inline limit (`10 KB` or
//! `10KB`) is still accepted but deprecated in favor of the `limit`
//! config option.

use super::MeasurementRequest;
use crate::error::SizeLimitError;
use crate::fmt::{parse_size, warn};
use crate::options::RunOptions;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static UNIT_RE: OnceLock<Regex> = OnceLock::new();
static FUSED_RE: OnceLock<Regex> = OnceLock::new();

/// Positional arguments split into an inline limit and files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyArgs {
    /// Deprecated inline limit, in bytes
    pub limit: Option<u64>,
    /// Remaining file arguments
    pub files: Vec<String>,
}

/// Strip a leading inline limit from positional arguments
///
/// # Examples
///
/// ```
/// use size_limit::request::strip_limit;
///
/// let args: Vec<String> = ["10", "KB", "index.js"].iter().map(|s| s.to_string()).collect();
/// let parsed = strip_limit(&args);
/// assert_eq!(parsed.limit, Some(10240));
/// assert_eq!(parsed.files, vec!["index.js"]);
/// ```
pub fn strip_limit(args: &[String]) -> LegacyArgs {
    let number = NUMBER_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"^\d+(\.\d+)?$").expect("number regex is valid")
    });
    let unit = UNIT_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"(?i)^[KMGT]?B$").expect("unit regex is valid")
    });
    let fused = FUSED_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"(?i)^\d+(\.\d+)?[KMGT]?B$").expect("fused limit regex is valid")
    });

    match args {
        [value, suffix, rest @ ..] if number.is_match(value) && unit.is_match(suffix) => {
            LegacyArgs {
                limit: parse_size(&format!("{} {}", value, suffix)),
                files: rest.to_vec(),
            }
        }
        [token, rest @ ..] if fused.is_match(token) => LegacyArgs {
            limit: parse_size(token),
            files: rest.to_vec(),
        },
        _ => LegacyArgs {
            limit: None,
            files: args.to_vec(),
        },
    }
}

/// Build the single request for positional-argument mode
///
/// Files resolve against the working directory without glob expansion.
/// A stripped inline limit triggers a deprecation warning on stderr.
pub fn build_legacy(options: &RunOptions) -> Result<MeasurementRequest, SizeLimitError> {
    let args = strip_limit(&options.files);

    if args.limit.is_some() {
        warn("Limit argument in Size Limit CLI was deprecated. Use `limit` option in Size Limit config.");
    }

    if args.files.is_empty() {
        let mut tokens = vec!["size-limit".to_string()];
        tokens.extend(options.invocation.iter().cloned());
        tokens.push("index.js".to_string());
        return Err(SizeLimitError::MissingFiles {
            example: format!("  {}", tokens.join(" ")),
        });
    }

    let full: Vec<PathBuf> = args
        .files
        .iter()
        .map(|file| options.cwd.join(file))
        .collect();

    Ok(MeasurementRequest {
        webpack: options.webpack,
        gzip: options.gzip,
        limit: args.limit,
        config: options.config.clone(),
        ..MeasurementRequest::new(full)
    })
}
