use anyhow::Result;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::VertexmapError;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated on every platform.
    pub relative: String,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Collect every `.java` file under `root_path`, sorted by file name at
    /// each directory level so the discovery order is stable across runs.
    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<FileInfo>> {
        // Collect all entries first for parallel filtering
        let entries: Vec<_> = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .collect();

        let files: Vec<FileInfo> = entries
            .par_iter()
            .filter_map(|entry| {
                let path = entry.path();
                let extension = path.extension().and_then(|ext| ext.to_str())?;
                if extension != "java" {
                    return None;
                }
                Some(FileInfo {
                    path: path.to_path_buf(),
                    relative: relative_key(path, root_path),
                })
            })
            .collect();

        Ok(files)
    }

    /// Read a file's full text with tolerant decoding: invalid byte sequences
    /// are substituted with U+FFFD instead of aborting the read.
    pub fn read_source(&self, file: &FileInfo) -> Result<String, VertexmapError> {
        let bytes = fs::read(&file.path).map_err(|source| VertexmapError::FileRead {
            path: file.path.clone(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn relative_key(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
