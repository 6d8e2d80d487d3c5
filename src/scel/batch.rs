//! File discovery and batch conversion around the pure decoder.
//!
//! These are thin I/O wrappers: find `.scel` files, read each one, convert
//! it and write the ibus text next to it (or into an output directory).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use super::types::error::{Result, ScelError};

/// Extension given to converted files.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Source extension to look for when walking directories.
    pub extension: String,
    /// Write outputs here instead of next to their inputs.
    pub output_dir: Option<PathBuf>,
    /// Skip failing files instead of aborting the run.
    pub keep_going: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            extension: "scel".to_string(),
            output_dir: None,
            keep_going: false,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// A discovered input file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path below the argument the file was found under; just the file
    /// name for files given directly.
    pub relative: PathBuf,
}

impl SourceFile {
    /// A file given directly, placed at the top of an output directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let relative = path.file_name().map(PathBuf::from).unwrap_or_else(|| path.clone());
        Self { path, relative }
    }
}

/// Collects input files from a mix of file and directory paths.
///
/// Directories are walked recursively for regular files whose extension
/// matches `extension` case-insensitively. Files given directly are kept
/// as-is. The result is sorted by path and free of duplicates.
///
/// A path that does not exist is an error. Entries that cannot be read
/// while walking are logged and skipped.
pub fn discover(paths: &[PathBuf], extension: &str) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(ScelError::MissingInput { path: path.clone() });
        }
        if path.is_file() {
            files.push(SourceFile::new(path.clone()));
            continue;
        }
        for entry in WalkDir::new(path) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };
            let matches = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(extension));
            if matches {
                let relative = entry
                    .path()
                    .strip_prefix(path)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
                files.push(SourceFile {
                    path: entry.into_path(),
                    relative,
                });
            }
        }
    }
    files.sort();
    files.dedup_by(|a, b| a.path == b.path);
    debug!("Discovered {} input files", files.len());
    Ok(files)
}

/// Output path for `source`: the same stem with a `.txt` extension, either
/// alongside the input or at the source's relative path inside `output_dir`.
pub fn output_path(source: &SourceFile, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(&source.relative).with_extension(OUTPUT_EXTENSION),
        None => source.path.with_extension(OUTPUT_EXTENSION),
    }
}

/// Converts one file and writes its ibus text to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    info!("Converting {}", input.display());
    let data = fs::read(input)?;
    let text = super::convert(&data)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, text)?;
    debug!("Wrote {}", output.display());
    Ok(())
}

/// Converts every discovered file.
///
/// Without `keep_going` the first failure aborts the run and is returned.
/// With it, failures are logged and recorded in the report. Two inputs that
/// map to the same output path are a failure for the second one; its output
/// is never written.
pub fn run(paths: &[PathBuf], options: &BatchOptions) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut outputs = HashSet::new();
    for source in discover(paths, &options.extension)? {
        let output = output_path(&source, options.output_dir.as_deref());
        let result = if outputs.insert(output.clone()) {
            convert_file(&source.path, &output)
        } else {
            Err(ScelError::DuplicateOutput {
                input: source.path.clone(),
                output: output.clone(),
            })
        };
        match result {
            Ok(()) => report.converted.push(output),
            Err(e) if options.keep_going => {
                warn!("Skipping {}: {}", source.path.display(), e);
                report.failed.push(source.path);
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        "Batch finished: {} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}
