//! Shared formatting utilities for size display and console output

use console::style;
use regex::{Captures, Regex};
use std::sync::OnceLock;

static SIZE_RE: OnceLock<Regex> = OnceLock::new();
static CODE_SPAN_RE: OnceLock<Regex> = OnceLock::new();

const UNITS: [(&str, u64); 6] = [
    ("PB", 1 << 50),
    ("TB", 1 << 40),
    ("GB", 1 << 30),
    ("MB", 1 << 20),
    ("KB", 1 << 10),
    ("B", 1),
];

/// Format bytes as a human-readable size string
///
/// Uses 1024-based units with at most two decimals and no trailing zeros.
///
/// # Examples
///
/// ```
/// use size_limit::fmt::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1024), "1 KB");
/// assert_eq!(format_size(10_000), "9.77 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let (unit, scale) = UNITS
        .iter()
        .copied()
        .find(|(_, scale)| bytes >= *scale)
        .unwrap_or(("B", 1));

    let value = format!("{:.2}", bytes as f64 / scale as f64);
    let value = value.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", value, unit)
}

/// Parse a human-readable size like `"9 KB"` or `"1.5mb"` into bytes
///
/// A bare number means bytes. Fractional results are floored.
///
/// # Examples
///
/// ```
/// use size_limit::fmt::parse_size;
///
/// assert_eq!(parse_size("1 KB"), Some(1024));
/// assert_eq!(parse_size("10kb"), Some(10240));
/// assert_eq!(parse_size("12"), Some(12));
/// assert_eq!(parse_size("big"), None);
/// ```
pub fn parse_size(input: &str) -> Option<u64> {
    let re = SIZE_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(b|kb|mb|gb|tb|pb)?\s*$").expect("size regex is valid")
    });

    let caps = re.captures(input)?;
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map_or_else(|| "B".to_string(), |m| m.as_str().to_ascii_uppercase());
    let (_, scale) = UNITS.iter().find(|(name, _)| *name == unit)?;

    Some((number * *scale as f64).floor() as u64)
}

/// Highlight back-ticked spans (`` `like this` ``) in yellow
pub fn highlight(message: &str) -> String {
    let re = CODE_SPAN_RE.get_or_init(|| {
        // Static pattern, cannot fail.
        Regex::new(r"`([^`]+)`").expect("code span regex is valid")
    });

    re.replace_all(message, |caps: &Captures<'_>| {
        style(&caps[1]).for_stderr().yellow().to_string()
    })
    .into_owned()
}

/// Uppercase the first character of a message
pub fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print a warning to stderr with a yellow ` WARN ` badge
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        style(" WARN ").for_stderr().on_yellow().black(),
        style(highlight(message)).for_stderr().yellow()
    );
}
