//! Test fixture helpers for creating JS projects
//!
//! Each [`Project`] lives in its own temporary directory, removed on drop.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create an empty project
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        self
    }

    /// Write package.json
    pub fn manifest(self, contents: &str) -> Self {
        self.file("package.json", contents)
    }

    /// Project root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project file
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// A file of `len` bytes that gzip cannot shrink much below its size
pub fn noisy_js(len: usize) -> String {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            char::from(b'!' + (state % 90) as u8)
        })
        .collect()
}
