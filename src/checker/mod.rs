//! Pine Script v6 compliance checks.
//!
//! [`check`] is pure: it never touches the filesystem and never fails. Absent
//! or unexpected patterns are reported as findings.

mod finding;
mod plot_scope;
mod result;
mod transp;
mod version;

pub use finding::{Finding, RuleId, Severity};
pub use plot_scope::{BlockState, PLOT_FUNCTIONS, PlotScopeTracker, check_plot_scope};
pub use result::{CheckOutcome, FileResult, RunSummary};
pub use transp::check_transp;
pub use version::{TARGET_VERSION, check_version, find_version};

/// Runs all checks over one document.
///
/// Findings are ordered by check: version directive, plot placement, then
/// deprecated parameters.
#[must_use]
pub fn check(lines: &[&str], full_text: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    if let Some(finding) = check_version(full_text) {
        outcome.push(finding);
    }
    for finding in check_plot_scope(lines) {
        outcome.push(finding);
    }
    if let Some(finding) = check_transp(full_text) {
        outcome.push(finding);
    }

    outcome
}

/// Splits `text` into lines on `'\n'` and runs [`check`].
#[must_use]
pub fn check_source(text: &str) -> CheckOutcome {
    let lines: Vec<&str> = text.split('\n').collect();
    check(&lines, text)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
