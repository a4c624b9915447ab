//! Path display utilities for consistent output formatting.

use std::path::{Path, PathBuf};

/// Format a path for display.
///
/// Strips a leading `./` and uses forward slashes so reports read the same on
/// every platform. Returns `"."` when nothing is left.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let result = normalize_separators(&normalize_for_matching(path).to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Normalize a path for glob matching: strips a leading `./` (or `.\`) and
/// converts backslashes to forward slashes.
///
/// `.` and `./` become an empty path.
#[must_use]
pub(crate) fn normalize_for_matching(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();

    let stripped = path_str
        .strip_prefix("./")
        .or_else(|| path_str.strip_prefix(".\\"))
        .unwrap_or(&path_str);

    if stripped.is_empty() || stripped == "." {
        return PathBuf::new();
    }

    if stripped.contains('\\') {
        PathBuf::from(stripped.replace('\\', "/"))
    } else {
        PathBuf::from(stripped)
    }
}
