use crate::checker::RunSummary;
use crate::{EXIT_ISSUES_FOUND, EXIT_NO_FILES, EXIT_SUCCESS};

/// Determine exit code from the run summary and mode flags.
///
/// - No files found: always `EXIT_NO_FILES`
/// - `warn_only`: success whenever files were checked
/// - `strict`: warnings fail like errors
pub const fn determine_exit_code(summary: &RunSummary, warn_only: bool, strict: bool) -> i32 {
    if summary.no_files() {
        return EXIT_NO_FILES;
    }
    if warn_only {
        return EXIT_SUCCESS;
    }
    if summary.has_errors() || (strict && summary.has_warnings()) {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    }
}
