//! Infrastructure traits for abstracting I/O operations.
//!
//! Config resolution and the bundled measurer read the filesystem only
//! through [`FileSystem`], so both can be tested against in-memory fixtures.

use std::io;
use std::path::Path;

/// Trait for abstracting the read-only filesystem operations the tool needs.
pub trait FileSystem: Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Read the entire contents of a file as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_reads_text_and_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.js");
        std::fs::write(&file_path, "export default 1\n").unwrap();

        let fs = RealFileSystem;
        assert_eq!(fs.read_to_string(&file_path).unwrap(), "export default 1\n");
        assert_eq!(fs.read(&file_path).unwrap().len(), 17);
    }

    #[test]
    fn test_real_filesystem_is_file_rejects_directories() {
        let temp_dir = TempDir::new().unwrap();
        let fs = RealFileSystem;

        assert!(!fs.is_file(temp_dir.path()));
        assert!(!fs.is_file(&temp_dir.path().join("missing.js")));
    }

    #[test]
    fn test_memory_filesystem_reports_not_found() {
        let fs = mock::MemoryFileSystem::default().with_file("/a.js", "a");
        assert!(fs.is_file(Path::new("/a.js")));
        let err = fs.read(Path::new("/b.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
