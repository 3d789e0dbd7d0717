//! Measurement requests and the two ways of building them
//!
//! - [`builder`] expands configuration entries (the normal path)
//! - [`legacy`] turns positional CLI arguments into a single request

pub mod builder;
pub mod glob;
pub mod legacy;

pub use builder::RequestBuilder;
pub use legacy::{build_legacy, strip_limit, LegacyArgs};

use std::path::PathBuf;

/// One normalized size check, ready for the evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementRequest {
    /// Absolute file paths, never empty
    pub full: Vec<PathBuf>,
    /// Bundle before measuring
    pub webpack: bool,
    /// Measure gzipped size
    pub gzip: bool,
    /// Budget in bytes; `None` means unlimited
    pub limit: Option<u64>,
    /// Display label
    pub name: Option<String>,
    /// Project's own package name
    pub bundle: Option<String>,
    /// Packages treated as externally provided
    pub ignore: Vec<String>,
    /// Custom bundler configuration
    pub config: Option<PathBuf>,
}

impl MeasurementRequest {
    /// A request for `full` with default policy: bundling and gzip on, no limit
    pub fn new(full: Vec<PathBuf>) -> Self {
        Self {
            full,
            webpack: true,
            gzip: true,
            limit: None,
            name: None,
            bundle: None,
            ignore: Vec::new(),
            config: None,
        }
    }
}
