//! Run options captured once from the command line and environment

use crate::measure::AnalyzerMode;
use std::path::PathBuf;

/// Everything a run needs from process-global state
///
/// Built once in `main` and threaded into each component, so the
/// resolver, builder, and evaluator can be tested without touching the
/// real environment.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Show the reasons view instead of a pass/fail check
    pub why: bool,
    /// Bundle files before measuring (legacy path only)
    pub webpack: bool,
    /// Measure gzipped size (legacy path only)
    pub gzip: bool,
    /// Print results as JSON
    pub json: bool,
    /// Custom bundler configuration, unless an entry overrides it
    pub config: Option<PathBuf>,
    /// Positional arguments; non-empty selects the legacy path
    pub files: Vec<String>,
    /// Raw arguments after the program name, for usage examples
    pub invocation: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
    /// How the reasons view should render
    pub analyzer: AnalyzerMode,
}

impl RunOptions {
    /// Defaults for a run in `cwd`: bundling and gzip on, everything else off
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            why: false,
            webpack: true,
            gzip: true,
            json: false,
            config: None,
            files: Vec::new(),
            invocation: Vec::new(),
            cwd: cwd.into(),
            analyzer: AnalyzerMode::default(),
        }
    }

    /// Whether positional files bypass configuration lookup
    pub fn is_legacy(&self) -> bool {
        !self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enables_bundling_and_gzip() {
        let options = RunOptions::new("/project");
        assert!(options.webpack);
        assert!(options.gzip);
        assert!(!options.why);
        assert!(!options.is_legacy());
    }

    #[test]
    fn test_positional_files_select_legacy_path() {
        let mut options = RunOptions::new("/project");
        options.files = vec!["index.js".to_string()];
        assert!(options.is_legacy());
    }
}
