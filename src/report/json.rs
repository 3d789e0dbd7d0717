//! JSON output for CI tooling

use crate::evaluate::{MeasurementResult, Verdict};
use serde::Serialize;

/// One result as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonResult {
    /// Display label, if any
    pub name: Option<String>,
    /// False only when a limit is set and exceeded
    pub passed: bool,
    /// Measured size in bytes
    pub size: u64,
    /// Limit in bytes, `null` when unlimited
    pub limit: Option<u64>,
}

impl JsonResult {
    /// Convert from a measurement result
    pub fn from_result(result: &MeasurementResult) -> Self {
        Self {
            name: result.request.name.clone(),
            passed: result.verdict() != Verdict::Failed,
            size: result.size,
            limit: result.request.limit,
        }
    }
}

/// The full `--json` document: an array of results in configuration order
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct JsonReport(pub Vec<JsonResult>);

impl JsonReport {
    /// Collect results
    pub fn new(results: &[MeasurementResult]) -> Self {
        Self(results.iter().map(JsonResult::from_result).collect())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
