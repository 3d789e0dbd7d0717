#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! size-limit library
//!
//! Resolves size budgets from a project's configuration, measures each
//! target, and judges the results. The CLI is a thin wrapper; everything
//! can also be driven programmatically.
//!
//! # Basic Example
//!
//! Building requests from an in-memory configuration:
//!
//! ```
//! use size_limit::config::{ConfigSource, LoadedConfig};
//! use size_limit::request::RequestBuilder;
//! use serde_json::json;
//!
//! let loaded = LoadedConfig {
//!     config: json!([{ "path": "dist/index.js", "limit": "10 KB" }]),
//!     filepath: "/project/.size-limit.json".into(),
//!     source: ConfigSource::File,
//! };
//!
//! let requests = RequestBuilder::new(&loaded, None).build().unwrap();
//! assert_eq!(requests[0].limit, Some(10 * 1024));
//! assert!(requests[0].gzip);
//! ```
//!
//! # Advanced Example: Judging Results
//!
//! Measuring with a custom [`measure::Measurer`] and computing the exit code:
//!
//! ```
//! use size_limit::error::SizeLimitError;
//! use size_limit::evaluate::Evaluator;
//! use size_limit::measure::{MeasureOptions, Measurement, Measurer};
//! use size_limit::options::RunOptions;
//! use size_limit::report;
//! use size_limit::request::MeasurementRequest;
//! use std::path::PathBuf;
//!
//! struct TwoBytes;
//!
//! impl Measurer for TwoBytes {
//!     fn measure(
//!         &self,
//!         _files: &[PathBuf],
//!         _options: &MeasureOptions<'_>,
//!     ) -> Result<Measurement, SizeLimitError> {
//!         Ok(Measurement { parsed: 2, gzip: None })
//!     }
//! }
//!
//! let options = RunOptions::new("/project");
//! let mut request = MeasurementRequest::new(vec!["/project/a.js".into()]);
//! request.limit = Some(1);
//!
//! let results = Evaluator::new(&TwoBytes, &options).evaluate(vec![request]).unwrap();
//! assert_eq!(report::exit_code(&results), 3);
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration discovery, parsing, and validation
pub mod config;
/// Error types and user-facing error rendering
pub mod error;
/// Concurrent measurement of requests
pub mod evaluate;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Measurement collaborator interface and the built-in measurer
pub mod measure;
/// Run options captured from the command line
pub mod options;
/// Text and JSON reporting, exit status
pub mod report;
/// Measurement requests from configuration or positional arguments
pub mod request;
