//! Result rendering and exit status
//!
//! - [`text`] renders the human-readable report
//! - [`json`] renders the machine-readable report for `--json`

pub mod json;
pub mod text;

pub use json::{JsonReport, JsonResult};
pub use text::render;

use crate::error::{EXIT_BUDGET_EXCEEDED, EXIT_SUCCESS};
use crate::evaluate::{MeasurementResult, Verdict};

/// Exit status for a finished check: 3 when any budget is exceeded
///
/// # Examples
///
/// ```
/// use size_limit::report::exit_code;
///
/// assert_eq!(exit_code(&[]), 0);
/// ```
pub fn exit_code(results: &[MeasurementResult]) -> i32 {
    if results.iter().any(|r| r.verdict() == Verdict::Failed) {
        EXIT_BUDGET_EXCEEDED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MeasurementRequest;
    use std::path::PathBuf;

    fn result(size: u64, limit: Option<u64>) -> MeasurementResult {
        let mut request = MeasurementRequest::new(vec![PathBuf::from("/p/a.js")]);
        request.limit = limit;
        MeasurementResult { request, size }
    }

    #[test]
    fn test_exit_code_single_failure() {
        assert_eq!(exit_code(&[result(2, Some(1))]), 3);
    }

    #[test]
    fn test_exit_code_any_failure_dominates() {
        let results = [result(10, Some(100)), result(200, Some(100)), result(5, None)];
        assert_eq!(exit_code(&results), 3);
    }

    #[test]
    fn test_exit_code_success_when_within_or_unlimited() {
        let results = [result(100, Some(100)), result(1 << 40, None)];
        assert_eq!(exit_code(&results), 0);
    }
}
