//! Evaluation of measurement requests
//!
//! Each request triggers one measurer call. Calls run in parallel and
//! results come back in request order. The first failure aborts the batch.

use crate::error::SizeLimitError;
use crate::measure::{MeasureOptions, Measurer};
use crate::options::RunOptions;
use crate::request::MeasurementRequest;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// Outcome of comparing a size against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Limit set and size within it (inclusive)
    Passed,
    /// Limit set and size above it
    Failed,
    /// No limit set
    Unlimited,
}

/// A request with its measured size attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementResult {
    /// The request that was measured
    pub request: MeasurementRequest,
    /// Gzip size if measured, otherwise parsed size
    pub size: u64,
}

impl MeasurementResult {
    /// Classify this result against its limit
    ///
    /// # Examples
    ///
    /// ```
    /// use size_limit::evaluate::{MeasurementResult, Verdict};
    /// use size_limit::request::MeasurementRequest;
    ///
    /// let mut request = MeasurementRequest::new(vec!["/p/a.js".into()]);
    /// request.limit = Some(100);
    /// let result = MeasurementResult { request, size: 100 };
    /// assert_eq!(result.verdict(), Verdict::Passed);
    /// ```
    pub fn verdict(&self) -> Verdict {
        match self.request.limit {
            None => Verdict::Unlimited,
            Some(limit) if self.size <= limit => Verdict::Passed,
            Some(_) => Verdict::Failed,
        }
    }
}

/// Runs measurements for a batch of requests
pub struct Evaluator<'a, M: Measurer> {
    measurer: &'a M,
    options: &'a RunOptions,
}

impl<'a, M: Measurer> Evaluator<'a, M> {
    /// Create an evaluator using `measurer` and the run's options
    pub fn new(measurer: &'a M, options: &'a RunOptions) -> Self {
        Self { measurer, options }
    }

    /// Measure every request
    ///
    /// With `--why`, every request must bundle; this is checked before any
    /// measurement starts. A single request in `--why` mode also asks the
    /// measurer for its reasons view.
    pub fn evaluate(
        &self,
        requests: Vec<MeasurementRequest>,
    ) -> Result<Vec<MeasurementResult>, SizeLimitError> {
        if self.options.why && requests.iter().any(|r| !r.webpack) {
            return Err(SizeLimitError::WhyWithoutWebpack);
        }

        let analyzer = (self.options.why && requests.len() == 1).then_some(self.options.analyzer);
        let started = Instant::now();

        let results = requests
            .into_par_iter()
            .map(|request| -> Result<MeasurementResult, SizeLimitError> {
                let options = MeasureOptions {
                    webpack: request.webpack,
                    gzip: request.gzip,
                    bundle: request.bundle.as_deref(),
                    config: request.config.as_deref().or(self.options.config.as_deref()),
                    ignore: &request.ignore,
                    analyzer,
                };
                let measurement = self.measurer.measure(&request.full, &options)?;
                Ok(MeasurementResult {
                    size: measurement.size(),
                    request,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Evaluated {} request(s) in {:?}",
            results.len(),
            started.elapsed()
        );
        Ok(results)
    }

    /// Reasons view across every request's files in one call
    ///
    /// Used by `--why` when there is more than one request.
    pub fn explain_all(&self, results: &[MeasurementResult]) -> Result<(), SizeLimitError> {
        let mut files: Vec<PathBuf> = Vec::new();
        let mut ignore: Vec<String> = Vec::new();
        for result in results {
            for file in &result.request.full {
                if !files.contains(file) {
                    files.push(file.clone());
                }
            }
            for name in &result.request.ignore {
                if !ignore.contains(name) {
                    ignore.push(name.clone());
                }
            }
        }

        let options = MeasureOptions {
            webpack: true,
            gzip: self.options.gzip,
            bundle: results.first().and_then(|r| r.request.bundle.as_deref()),
            config: self.options.config.as_deref(),
            ignore: &ignore,
            analyzer: Some(self.options.analyzer),
        };
        self.measurer.measure(&files, &options).map(|_| ())
    }
}
