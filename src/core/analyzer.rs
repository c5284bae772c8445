use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use super::error::VertexmapError;
use super::scanner::{FileInfo, FileScanner};
use crate::rules::{DependencyExtractor, SourceUnit};

/// One file that could not be read. The file is excluded from the mapping;
/// the rest of the batch is unaffected.
#[derive(Debug)]
pub struct ScanFailure {
    pub relative: String,
    pub error: VertexmapError,
}

/// Outcome of a batch scan: successes and failures as explicit lists rather
/// than a side-channel log.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub units: Vec<SourceUnit>,
    pub failures: Vec<ScanFailure>,
}

pub struct SourceAnalyzer {
    scanner: FileScanner,
    extractor: DependencyExtractor,
}

impl SourceAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::new(),
            extractor: DependencyExtractor::new()?,
        })
    }

    /// Scan `root` and extract every `.java` file found under it.
    ///
    /// A missing root directory is a fatal precondition; a single unreadable
    /// file is not.
    pub fn analyze(&self, root: &Path) -> Result<ScanReport> {
        if !root.is_dir() {
            return Err(VertexmapError::MissingSourceDirectory {
                path: root.to_path_buf(),
            }
            .into());
        }

        let files = self.scanner.scan_directory(root)?;
        Ok(self.analyze_files(&files))
    }

    /// Extract an externally supplied candidate list. Sequential: each file's
    /// scan is independent of every other, and the unit order follows the
    /// input list so the canonical export is stable.
    pub fn analyze_files(&self, files: &[FileInfo]) -> ScanReport {
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut report = ScanReport::default();
        for file in files {
            progress.set_message(file.relative.clone());
            match self.scanner.read_source(file) {
                Ok(content) => {
                    report.units.push(self.extractor.extract(&file.relative, &content));
                }
                Err(error) => {
                    report.failures.push(ScanFailure {
                        relative: file.relative.clone(),
                        error,
                    });
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        report
    }
}
