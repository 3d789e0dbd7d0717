//! Glob expansion of entry paths
//!
//! Patterns are matched against files under the config directory.
//! Patterns starting with `!` remove matches of earlier patterns.

use crate::error::SizeLimitError;
use std::path::Path;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Expand `patterns` relative to `base`
///
/// Returns matched paths relative to `base` with forward slashes, ordered
/// by pattern and then by path, without duplicates. An empty result means
/// nothing matched.
pub fn expand(patterns: &[String], base: &Path) -> Result<Vec<String>, SizeLimitError> {
    let mut matched: Vec<String> = Vec::new();
    let mut excluded: Vec<String> = Vec::new();

    for raw in patterns {
        if let Some(negated) = raw.strip_prefix('!') {
            excluded.push(normalize(negated));
            continue;
        }

        for path in expand_one(&normalize(raw), base)? {
            if !matched.contains(&path) {
                matched.push(path);
            }
        }
    }

    for pattern in &excluded {
        let glob = compile(pattern)?;
        matched.retain(|path| glob.matched(&CandidatePath::from(path.as_str())).is_none());
    }

    log::debug!(
        "Expanded {:?} in {}: {} match(es)",
        patterns,
        base.display(),
        matched.len()
    );
    Ok(matched)
}

fn expand_one(pattern: &str, base: &Path) -> Result<Vec<String>, SizeLimitError> {
    if !pattern.contains(GLOB_META) {
        return Ok(if base.join(pattern).is_file() {
            vec![pattern.to_string()]
        } else {
            Vec::new()
        });
    }

    let glob = compile(pattern)?;
    let root = base.join(literal_prefix(pattern));

    let mut found: Vec<String> = WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| relative_slash_path(e.path(), base))
        .filter(|path| glob.matched(&CandidatePath::from(path.as_str())).is_some())
        .collect();
    found.sort();
    Ok(found)
}

fn compile(pattern: &str) -> Result<Glob<'_>, SizeLimitError> {
    Glob::new(pattern).map_err(|e| SizeLimitError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn normalize(pattern: &str) -> String {
    pattern
        .trim_start_matches("./")
        .replace('\\', "/")
}

/// Leading directories of a pattern that contain no wildcards
fn literal_prefix(pattern: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut segments = pattern.split('/').peekable();
    while let Some(segment) = segments.next() {
        // The last segment names files, never a directory to walk from
        if segment.contains(GLOB_META) || segments.peek().is_none() {
            break;
        }
        parts.push(segment);
    }
    parts.join("/")
}

fn relative_slash_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("dist/chunks")).unwrap();
        fs::write(root.join("index.js"), "index").unwrap();
        fs::write(root.join("dist/a.js"), "a").unwrap();
        fs::write(root.join("dist/b.js"), "b").unwrap();
        fs::write(root.join("dist/a.css"), "css").unwrap();
        fs::write(root.join("dist/chunks/c.js"), "c").unwrap();
        temp
    }

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expand_literal_path() {
        let temp = project();
        let found = expand(&patterns(&["index.js"]), temp.path()).unwrap();
        assert_eq!(found, vec!["index.js"]);
    }

    #[test]
    fn test_expand_literal_missing_path_is_empty() {
        let temp = project();
        let found = expand(&patterns(&["dist/not-built.js"]), temp.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_expand_star_pattern_is_sorted() {
        let temp = project();
        let found = expand(&patterns(&["dist/*.js"]), temp.path()).unwrap();
        assert_eq!(found, vec!["dist/a.js", "dist/b.js"]);
    }

    #[test]
    fn test_expand_globstar_and_dot_slash() {
        let temp = project();
        let found = expand(&patterns(&["./dist/**/*.js"]), temp.path()).unwrap();
        assert_eq!(found, vec!["dist/a.js", "dist/b.js", "dist/chunks/c.js"]);
    }

    #[test]
    fn test_expand_keeps_pattern_order_and_dedupes() {
        let temp = project();
        let found = expand(&patterns(&["index.js", "dist/*.js", "dist/a.js"]), temp.path()).unwrap();
        assert_eq!(found, vec!["index.js", "dist/a.js", "dist/b.js"]);
    }

    #[test]
    fn test_expand_negation_removes_matches() {
        let temp = project();
        let found = expand(&patterns(&["dist/**/*.js", "!dist/chunks/**"]), temp.path()).unwrap();
        assert_eq!(found, vec!["dist/a.js", "dist/b.js"]);
    }

    #[test]
    fn test_literal_prefix_stops_at_wildcards() {
        assert_eq!(literal_prefix("dist/*.js"), "dist");
        assert_eq!(literal_prefix("dist/chunks/**/*.js"), "dist/chunks");
        assert_eq!(literal_prefix("**/*.js"), "");
        assert_eq!(literal_prefix("*.js"), "");
    }
}
