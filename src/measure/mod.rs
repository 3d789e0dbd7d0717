//! Measurement collaborator interface
//!
//! A [`Measurer`] turns an ordered list of files into byte counts. The
//! evaluator only depends on this trait; [`FsMeasurer`] is the built-in
//! implementation used by the CLI.

pub mod fs;

pub use fs::FsMeasurer;

use crate::error::SizeLimitError;
use std::path::{Path, PathBuf};

/// How the reasons view should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyzerMode {
    /// Interactive, styled rendering
    #[default]
    Server,
    /// Plain, reproducible rendering
    Static,
}

impl AnalyzerMode {
    /// Pick the mode from the `NODE_ENV` value. `test` selects [`AnalyzerMode::Static`].
    ///
    /// # Examples
    ///
    /// ```
    /// use size_limit::measure::AnalyzerMode;
    ///
    /// assert_eq!(AnalyzerMode::from_node_env(Some("test")), AnalyzerMode::Static);
    /// assert_eq!(AnalyzerMode::from_node_env(None), AnalyzerMode::Server);
    /// ```
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("test") => Self::Static,
            _ => Self::Server,
        }
    }
}

/// Options for one measurement call
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureOptions<'a> {
    /// Bundle the files (enables externals)
    pub webpack: bool,
    /// Report the gzipped size too
    pub gzip: bool,
    /// Project's own package name, excluded from the bundle
    pub bundle: Option<&'a str>,
    /// Custom bundler configuration
    pub config: Option<&'a Path>,
    /// Packages treated as externally provided
    pub ignore: &'a [String],
    /// Render the reasons view as a side channel
    pub analyzer: Option<AnalyzerMode>,
}

/// Byte counts reported by a measurer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Uncompressed size
    pub parsed: u64,
    /// Compressed size, when gzip was requested
    pub gzip: Option<u64>,
}

impl Measurement {
    /// Size used for budget checks: gzip if reported, otherwise parsed
    pub fn size(&self) -> u64 {
        self.gzip.unwrap_or(self.parsed)
    }
}

/// Something that can measure the size of a set of files
pub trait Measurer: Sync {
    /// Measure `files` (absolute paths, in order)
    fn measure(
        &self,
        files: &[PathBuf],
        options: &MeasureOptions<'_>,
    ) -> Result<Measurement, SizeLimitError>;
}
