use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{FileResult, check_source};

/// Read one file and run the compliance checks on it.
///
/// A read failure (missing file, permissions, invalid UTF-8) becomes a single
/// error finding for that file so the rest of the scan continues.
pub fn process_file(path: &Path) -> FileResult {
    match fs::read_to_string(path) {
        Ok(content) => FileResult::new(path.to_path_buf(), check_source(&content)),
        Err(e) => FileResult::unreadable(path.to_path_buf(), &e.to_string()),
    }
}

/// Check every file in order.
pub fn process_files(files: &[PathBuf]) -> Vec<FileResult> {
    files.iter().map(|path| process_file(path)).collect()
}
