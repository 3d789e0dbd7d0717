//! Human-readable report

use crate::evaluate::{MeasurementResult, Verdict};
use crate::fmt::format_size;
use console::style;

/// Render every result as an indented block
///
/// The name header is shown only when more than one result is rendered.
/// Output starts and ends with a blank line.
pub fn render(results: &[MeasurementResult]) -> String {
    let with_names = results.len() > 1;
    let blocks: Vec<String> = results
        .iter()
        .map(|result| render_block(result, with_names))
        .collect();
    format!("\n{}\n\n", blocks.join("\n\n"))
}

fn render_block(result: &MeasurementResult, with_name: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    if with_name {
        if let Some(name) = &result.request.name {
            lines.push(format!("  {}", style(name).bold()));
        }
    }

    let size = result.size;
    match (result.verdict(), result.request.limit) {
        (Verdict::Failed, Some(limit)) => {
            let (size_text, limit_text) = distinct_sizes(size, limit);
            lines.push(format!(
                "  {}",
                style(format!(
                    "Package size limit has exceeded by {}",
                    format_size(size - limit)
                ))
                .red()
            ));
            lines.push(format!("  Package size: {}", style(size_text).red().bold()));
            lines.push(format!("  Size limit:   {}", style(limit_text).bold()));
        }
        (Verdict::Passed, Some(limit)) => {
            lines.push(format!(
                "  Package size: {}",
                style(format_size(size)).green().bold()
            ));
            lines.push(format!("  Size limit:   {}", style(format_size(limit)).bold()));
        }
        _ => {
            lines.push(format!("  Package size: {}", style(format_size(size)).bold()));
        }
    }

    lines.join("\n")
}

/// Human-readable size and limit, or exact bytes when rounding makes them equal
fn distinct_sizes(size: u64, limit: u64) -> (String, String) {
    let size_text = format_size(size);
    let limit_text = format_size(limit);
    if size_text == limit_text {
        (format!("{} B", size), format!("{} B", limit))
    } else {
        (size_text, limit_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MeasurementRequest;
    use console::strip_ansi_codes;
    use std::path::PathBuf;

    fn result(name: &str, size: u64, limit: Option<u64>) -> MeasurementResult {
        let mut request = MeasurementRequest::new(vec![PathBuf::from("/p").join(name)]);
        request.name = Some(name.to_string());
        request.limit = limit;
        MeasurementResult { request, size }
    }

    fn plain(results: &[MeasurementResult]) -> String {
        strip_ansi_codes(&render(results)).into_owned()
    }

    #[test]
    fn test_render_unlimited_shows_size_only() {
        let output = plain(&[result("a.js", 2048, None)]);
        assert_eq!(output, "\n  Package size: 2 KB\n\n");
    }

    #[test]
    fn test_render_passed_shows_size_and_limit() {
        let output = plain(&[result("a.js", 1024, Some(1024))]);
        assert_eq!(output, "\n  Package size: 1 KB\n  Size limit:   1 KB\n\n");
    }

    #[test]
    fn test_render_failed_shows_overflow() {
        let output = plain(&[result("a.js", 2, Some(1))]);
        assert_eq!(
            output,
            "\n  Package size limit has exceeded by 1 B\n  Package size: 2 B\n  Size limit:   1 B\n\n"
        );
    }

    #[test]
    fn test_render_failed_uses_exact_bytes_when_rounding_collides() {
        let output = plain(&[result("a.js", 10241, Some(10240))]);
        assert!(output.contains("Package size limit has exceeded by 1 B"));
        assert!(output.contains("Package size: 10241 B"));
        assert!(output.contains("Size limit:   10240 B"));
    }

    #[test]
    fn test_render_names_only_with_multiple_results() {
        let single = plain(&[result("a.js", 10, None)]);
        assert!(!single.contains("a.js"));

        let many = plain(&[result("a.js", 10, None), result("b.js", 20, Some(100))]);
        assert_eq!(
            many,
            "\n  a.js\n  Package size: 10 B\n\n  b.js\n  Package size: 20 B\n  Size limit:   100 B\n\n"
        );
    }

    #[test]
    fn test_render_skips_missing_name() {
        let mut unnamed = result("a.js", 10, None);
        unnamed.request.name = None;
        let output = plain(&[unnamed, result("b.js", 20, None)]);
        assert!(output.starts_with("\n  Package size: 10 B\n\n  b.js"));
    }

    #[test]
    fn test_distinct_sizes_keeps_readable_forms_when_different() {
        assert_eq!(
            distinct_sizes(2048, 1024),
            ("2 KB".to_string(), "1 KB".to_string())
        );
    }
}
