//! Error types with recognized/unexpected classification
//!
//! Every failure the tool can raise is a [`SizeLimitError`]. Each variant
//! belongs to one [`ErrorKind`]:
//! - `Recognized` errors are user mistakes (bad config, bad arguments).
//!   They render as one short message plus an inline example.
//! - `Unexpected` errors render with their full cause chain.
//!
//! Budget violations are not errors: they are reported by the reporter
//! and surface only through [`EXIT_BUDGET_EXCEEDED`].
//!
//! # Examples
//!
//! ```
//! use size_limit::error::{ErrorKind, SizeLimitError};
//!
//! let err = SizeLimitError::ConfigNotFound;
//! assert_eq!(err.kind(), ErrorKind::Recognized);
//! assert!(err.example().is_some());
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, ConfigSource};
use crate::fmt::highlight;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any error
pub const EXIT_ERROR: i32 = 1;
/// Exit code when at least one result exceeds its limit
pub const EXIT_BUDGET_EXCEEDED: i32 = 3;

/// Example of a `size-limit` section inside package.json
pub const PACKAGE_EXAMPLE: &str = r#"  "size-limit": [
    {
      "path": "index.js",
      "limit": "9 KB"
    }
  ]"#;

/// Example of a dedicated `.size-limit` file
pub const FILE_EXAMPLE: &str = r#"  [
    {
      "path": "index.js",
      "limit": "9 KB"
    }
  ]"#;

/// How an error should be presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration or usage mistake with an actionable message
    Recognized,
    /// Internal or collaborator failure, shown with full detail
    Unexpected,
}

/// Errors raised while resolving, building, or measuring size checks
#[derive(Error, Debug)]
pub enum SizeLimitError {
    /// No configuration in package.json or a dedicated file
    #[error("Can not find settings for Size Limit. Add it to section `\"size-limit\"` in package.json according to Size Limit docs.")]
    ConfigNotFound,

    /// package.json is not valid JSON
    #[error("{message}")]
    ManifestParse {
        /// Parser message without its position wrapper
        message: String,
    },

    /// A dedicated config file could not be parsed
    #[error("Can not parse {file} at {line}:{column}. {reason}")]
    ConfigParse {
        /// File path relative to the working directory
        file: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
        /// Parser reason, capitalized
        reason: String,
    },

    /// Configuration has the wrong structure
    #[error("{}", invalid_config_message(.origin, .code))]
    InvalidConfig {
        /// Where the configuration came from
        origin: ConfigSource,
        /// Classifier result
        code: ConfigError,
    },

    /// An entry has a field of the wrong type
    #[error("Size Limit config entry #{index} is invalid. {reason}")]
    InvalidEntry {
        /// 1-based position of the entry
        index: usize,
        /// Deserializer reason, capitalized
        reason: String,
    },

    /// A `limit` value is not a size
    #[error("Can not parse limit `{value}` of `{entry}`. Use a size like `9 KB`")]
    InvalidLimit {
        /// The raw limit string
        value: String,
        /// Name or path of the offending entry
        entry: String,
    },

    /// A `path` pattern is not a valid glob
    #[error("Can not use pattern `{pattern}` in Size Limit config. {reason}")]
    InvalidPattern {
        /// The raw pattern
        pattern: String,
        /// Glob parser reason
        reason: String,
    },

    /// `--why` was combined with an entry that disables bundling
    #[error("`--why` does not work with `webpack: false`")]
    WhyWithoutWebpack,

    /// `--why` output and `--json` output would share stdout
    #[error("`--why` can not be combined with `--json`")]
    WhyWithJson,

    /// The legacy CLI path received no files
    #[error("Specify project files or run in project dir with package.json. For example:")]
    MissingFiles {
        /// Suggested invocation built from the actual arguments
        example: String,
    },

    /// The measurer could not resolve a module or file
    #[error("Module not found: can't resolve '{module}' in '{context}'")]
    ModuleNotFound {
        /// Module or file that failed to resolve
        module: String,
        /// Directory the resolution started from
        context: PathBuf,
    },

    /// Custom bundler configuration does not exist
    #[error("Bundler config not found: {path}")]
    BundlerConfigNotFound {
        /// Path to the missing config
        path: PathBuf,
    },

    /// I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

fn invalid_config_message(origin: &ConfigSource, code: &ConfigError) -> &'static str {
    match (origin, code) {
        (ConfigSource::Manifest, ConfigError::NotArray) => {
            "The `\"size-limit\"` section of package.json must be `an array`"
        }
        (ConfigSource::Manifest, ConfigError::Empty) => {
            "The `\"size-limit\"` section of package.json must `not be empty`"
        }
        (ConfigSource::Manifest, ConfigError::NotObject) => {
            "The `\"size-limit\"` array in package.json should contain only objects"
        }
        (ConfigSource::File, ConfigError::NotArray) => "Size Limit config must contain `an array`",
        (ConfigSource::File, ConfigError::Empty) => "Size Limit config must `not be empty`",
        (ConfigSource::File, ConfigError::NotObject) => {
            "Size Limit config array should contain only objects"
        }
        (_, ConfigError::NotString) => {
            "The `path` in Size Limit config must be `a string` or `an array of strings`"
        }
    }
}

impl SizeLimitError {
    /// Whether this error is a recognized user mistake or an internal failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound
            | Self::ManifestParse { .. }
            | Self::ConfigParse { .. }
            | Self::InvalidConfig { .. }
            | Self::InvalidEntry { .. }
            | Self::InvalidLimit { .. }
            | Self::InvalidPattern { .. }
            | Self::WhyWithoutWebpack
            | Self::WhyWithJson
            | Self::MissingFiles { .. } => ErrorKind::Recognized,
            Self::ModuleNotFound { .. } | Self::BundlerConfigNotFound { .. } | Self::Io { .. } => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Inline example printed under a recognized error.
    pub fn example(&self) -> Option<&str> {
        match self {
            Self::ConfigNotFound => Some(PACKAGE_EXAMPLE),
            Self::InvalidConfig { origin, .. } => Some(match origin {
                ConfigSource::Manifest => PACKAGE_EXAMPLE,
                ConfigSource::File => FILE_EXAMPLE,
            }),
            Self::MissingFiles { example } => Some(example),
            _ => None,
        }
    }

    /// Process exit code for this error. Always [`EXIT_ERROR`].
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format an error for stderr.
    ///
    /// Recognized errors become a short badge line with their example;
    /// everything else gets the full cause chain.
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        if let Some(err) = error.downcast_ref::<SizeLimitError>() {
            if let SizeLimitError::ModuleNotFound { module, context } = err {
                return format!(
                    "{} {}\n  {}\n",
                    style(" ERROR ").on_red().black(),
                    style(highlight(&format!("Size Limit can't resolve `{}`", module))).red(),
                    style(format!("in {}", context.display())).red()
                );
            }

            if err.kind() == ErrorKind::Recognized {
                let mut output = format!(
                    "{} {}\n",
                    style(" ERROR ").on_red().black(),
                    style(highlight(&err.to_string())).red()
                );
                if let Some(example) = err.example() {
                    output.push_str(&format!("{}\n", highlight(example)));
                }
                return output;
            }
        }

        let mut output = format!("{} {}\n", style("error:").red().bold(), error);

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<SizeLimitError>()
            .map_or(EXIT_ERROR, SizeLimitError::exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(error: SizeLimitError) -> String {
        console::strip_ansi_codes(&ErrorFormatter::format(&anyhow::Error::new(error))).into_owned()
    }

    #[test]
    fn test_missing_config_is_recognized_with_package_example() {
        let err = SizeLimitError::ConfigNotFound;
        assert_eq!(err.kind(), ErrorKind::Recognized);
        assert!(err.example().unwrap().contains("\"size-limit\""));
    }

    #[test]
    fn test_invalid_config_picks_table_by_source() {
        let manifest = SizeLimitError::InvalidConfig {
            origin: ConfigSource::Manifest,
            code: ConfigError::NotArray,
        };
        let file = SizeLimitError::InvalidConfig {
            origin: ConfigSource::File,
            code: ConfigError::NotArray,
        };

        assert!(manifest.to_string().contains("package.json"));
        assert!(!file.to_string().contains("package.json"));
        assert_eq!(manifest.example(), Some(PACKAGE_EXAMPLE));
        assert_eq!(file.example(), Some(FILE_EXAMPLE));
    }

    #[test]
    fn test_not_string_message_is_shared_between_sources() {
        let manifest = SizeLimitError::InvalidConfig {
            origin: ConfigSource::Manifest,
            code: ConfigError::NotString,
        };
        let file = SizeLimitError::InvalidConfig {
            origin: ConfigSource::File,
            code: ConfigError::NotString,
        };
        assert_eq!(manifest.to_string(), file.to_string());
    }

    #[test]
    fn test_io_error_is_unexpected() {
        let err = SizeLimitError::io("reading package.json", std::io::Error::other("boom"));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.example().is_none());
    }

    #[test]
    fn test_all_errors_exit_with_generic_code() {
        let errors = vec![
            SizeLimitError::ConfigNotFound,
            SizeLimitError::WhyWithoutWebpack,
            SizeLimitError::MissingFiles {
                example: "size-limit index.js".to_string(),
            },
            SizeLimitError::io("x", std::io::Error::other("y")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), EXIT_ERROR);
        }
    }

    #[test]
    fn test_format_recognized_error_has_badge_and_example() {
        let out = plain(SizeLimitError::ConfigNotFound);
        assert!(out.starts_with(" ERROR "));
        assert!(out.contains("Can not find settings"));
        assert!(out.contains("\"limit\": \"9 KB\""));
        assert!(!out.contains("caused by"));
    }

    #[test]
    fn test_format_module_not_found_uses_two_lines() {
        let out = plain(SizeLimitError::ModuleNotFound {
            module: "react".to_string(),
            context: PathBuf::from("/project"),
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Size Limit can't resolve react"));
        assert!(lines[1].contains("in /project"));
    }

    #[test]
    fn test_format_unexpected_error_shows_cause_chain() {
        let err = SizeLimitError::io(
            "reading index.js",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let out = plain(err);
        assert!(out.starts_with("error: I/O error: reading index.js"));
        assert!(out.contains("caused by: denied"));
    }

    #[test]
    fn test_exit_code_for_foreign_error_is_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), EXIT_ERROR);
    }
}
