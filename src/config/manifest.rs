//! Project metadata from the nearest package.json

use super::file::MANIFEST_FILE_NAME;
use super::loader::parse_manifest;
use crate::error::SizeLimitError;
use crate::infra::{FileSystem, RealFileSystem};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Fields of package.json the request builder inherits
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectManifest {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,

    /// Packages the host project is expected to provide
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,
}

impl ProjectManifest {
    /// Load the nearest package.json at or above `cwd`
    ///
    /// Returns `Ok(None)` when no manifest exists.
    pub fn find(cwd: &Path) -> Result<Option<(PathBuf, Self)>, SizeLimitError> {
        Self::find_with_fs(cwd, &RealFileSystem)
    }

    /// Load the nearest manifest with a custom filesystem implementation
    pub fn find_with_fs<FS: FileSystem>(
        cwd: &Path,
        fs: &FS,
    ) -> Result<Option<(PathBuf, Self)>, SizeLimitError> {
        for dir in cwd.ancestors() {
            let path = dir.join(MANIFEST_FILE_NAME);
            let contents = match fs.read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(SizeLimitError::io(format!("reading {}", path.display()), e))
                }
            };

            let value = parse_manifest(&contents)?;
            // Malformed metadata counts as absent
            let manifest = serde_json::from_value(value).unwrap_or_else(|e| {
                log::debug!("Ignoring malformed fields in {}: {}", path.display(), e);
                Self::default()
            });
            return Ok(Some((path, manifest)));
        }
        Ok(None)
    }

    /// Names of peer dependencies, in sorted order
    pub fn peer_names(&self) -> Vec<String> {
        self.peer_dependencies.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock::MemoryFileSystem;

    #[test]
    fn test_find_reads_name_and_peers() {
        let fs = MemoryFileSystem::default().with_file(
            "/project/package.json",
            r#"{ "name": "nanoid", "peerDependencies": { "react": "^18", "preact": "^10" } }"#,
        );

        let (path, manifest) = ProjectManifest::find_with_fs(Path::new("/project/src"), &fs)
            .unwrap()
            .unwrap();
        assert_eq!(path, PathBuf::from("/project/package.json"));
        assert_eq!(manifest.name.as_deref(), Some("nanoid"));
        assert_eq!(manifest.peer_names(), vec!["preact", "react"]);
    }

    #[test]
    fn test_find_without_manifest_returns_none() {
        let fs = MemoryFileSystem::default();
        let found = ProjectManifest::find_with_fs(Path::new("/project"), &fs).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_tolerates_missing_fields() {
        let fs = MemoryFileSystem::default().with_file("/project/package.json", "{}");
        let (_, manifest) = ProjectManifest::find_with_fs(Path::new("/project"), &fs)
            .unwrap()
            .unwrap();
        assert_eq!(manifest, ProjectManifest::default());
    }

    #[test]
    fn test_find_rejects_invalid_json() {
        let fs = MemoryFileSystem::default().with_file("/project/package.json", "{ name }");
        let err = ProjectManifest::find_with_fs(Path::new("/project"), &fs).unwrap_err();
        assert!(matches!(err, SizeLimitError::ManifestParse { .. }));
    }
}
