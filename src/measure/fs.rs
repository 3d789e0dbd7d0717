//! Built-in measurer that reads files straight from disk
//!
//! The files are concatenated in order. `parsed` is the byte count of the
//! concatenation and `gzip` its gzip-compressed size. With bundling on,
//! files inside `node_modules/<pkg>/` for ignored packages or the project's
//! own package are left out as externals.

use super::{AnalyzerMode, MeasureOptions, Measurement, Measurer};
use crate::error::SizeLimitError;
use crate::fmt::format_size;
use crate::infra::{FileSystem, RealFileSystem};
use console::style;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One file's share of a measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// File path
    pub path: PathBuf,
    /// Uncompressed bytes
    pub bytes: u64,
    /// Left out of the bundle as an external
    pub external: bool,
}

/// Measurer backed by a [`FileSystem`]
#[derive(Debug, Clone, Default)]
pub struct FsMeasurer<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl FsMeasurer<RealFileSystem> {
    /// Create a measurer over the real filesystem
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<FS: FileSystem> FsMeasurer<FS> {
    /// Create a measurer with a custom filesystem implementation
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    fn collect(
        &self,
        files: &[PathBuf],
        options: &MeasureOptions<'_>,
    ) -> Result<(Vec<u8>, Vec<Contribution>), SizeLimitError> {
        let mut bundle = Vec::new();
        let mut contributions = Vec::with_capacity(files.len());

        for path in files {
            let contents = self.fs.read(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SizeLimitError::ModuleNotFound {
                    module: path
                        .file_name()
                        .map_or_else(|| path.display().to_string(), |n| {
                            n.to_string_lossy().into_owned()
                        }),
                    context: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                },
                _ => SizeLimitError::io(format!("reading {}", path.display()), e),
            })?;

            let external = options.webpack && is_external(path, options);
            if !external {
                bundle.extend_from_slice(&contents);
            }
            contributions.push(Contribution {
                path: path.clone(),
                bytes: contents.len() as u64,
                external,
            });
        }

        Ok((bundle, contributions))
    }
}

impl<FS: FileSystem> Measurer for FsMeasurer<FS> {
    fn measure(
        &self,
        files: &[PathBuf],
        options: &MeasureOptions<'_>,
    ) -> Result<Measurement, SizeLimitError> {
        if let Some(config) = options.config {
            if !self.fs.is_file(config) {
                return Err(SizeLimitError::BundlerConfigNotFound {
                    path: config.to_path_buf(),
                });
            }
        }

        let (bundle, contributions) = self.collect(files, options)?;
        let parsed = bundle.len() as u64;
        let gzip = if options.gzip {
            Some(gzip_size(&bundle)?)
        } else {
            None
        };
        log::debug!(
            "Measured {} file(s): {} parsed, {:?} gzip",
            files.len(),
            parsed,
            gzip
        );

        if let Some(mode) = options.analyzer {
            print!("{}", render_reasons(&contributions, mode));
        }

        Ok(Measurement { parsed, gzip })
    }
}

fn is_external(path: &Path, options: &MeasureOptions<'_>) -> bool {
    let path = path.to_string_lossy().replace('\\', "/");
    options
        .ignore
        .iter()
        .map(String::as_str)
        .chain(options.bundle)
        .any(|name| path.contains(&format!("node_modules/{}/", name)))
}

fn gzip_size(bytes: &[u8]) -> Result<u64, SizeLimitError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(bytes)
        .map_err(|e| SizeLimitError::io("compressing bundle", e))?;
    let compressed = encoder
        .finish()
        .map_err(|e| SizeLimitError::io("compressing bundle", e))?;
    Ok(compressed.len() as u64)
}

/// Render the per-file contribution table, largest first
pub fn render_reasons(contributions: &[Contribution], mode: AnalyzerMode) -> String {
    let total: u64 = contributions
        .iter()
        .filter(|c| !c.external)
        .map(|c| c.bytes)
        .sum();

    let mut rows: Vec<&Contribution> = contributions.iter().collect();
    rows.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.path.cmp(&b.path)));

    let mut output = String::from("\n");
    for row in rows {
        let size = format_size(row.bytes);
        let path = row.path.display().to_string();
        let line = if row.external {
            format!("  {:>10}  {} (external)", size, path)
        } else {
            let percent = if total == 0 {
                0.0
            } else {
                row.bytes as f64 / total as f64 * 100.0
            };
            format!("  {:>10}  {:>5.1}%  {}", size, percent, path)
        };

        match mode {
            AnalyzerMode::Static => output.push_str(&line),
            AnalyzerMode::Server if row.external => output.push_str(&style(line).dim().to_string()),
            AnalyzerMode::Server => output.push_str(&style(line).cyan().to_string()),
        }
        output.push('\n');
    }
    output
}
