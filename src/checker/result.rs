use std::path::{Path, PathBuf};

use super::finding::{Finding, RuleId, Severity};

/// Errors and warnings found in one document, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl CheckOutcome {
    /// Appends a finding to the list matching its severity.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    #[must_use]
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|f| f.message.as_str()).collect()
    }

    #[must_use]
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|f| f.message.as_str()).collect()
    }
}

/// Outcome for one checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: CheckOutcome,
}

impl FileResult {
    #[must_use]
    pub const fn new(path: PathBuf, outcome: CheckOutcome) -> Self {
        Self { path, outcome }
    }

    /// Result for a file whose contents could not be read.
    #[must_use]
    pub fn unreadable(path: PathBuf, reason: &str) -> Self {
        let mut outcome = CheckOutcome::default();
        outcome.push(Finding::error(
            RuleId::UnreadableFile,
            format!("Failed to read file: {reason}"),
        ));
        Self { path, outcome }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.outcome.errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.outcome.warnings.is_empty()
    }
}

/// Totals across a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunSummary {
    #[must_use]
    pub fn from_results(results: &[FileResult]) -> Self {
        results.iter().fold(
            Self {
                files_checked: results.len(),
                ..Self::default()
            },
            |mut acc, r| {
                acc.errors += r.outcome.errors.len();
                acc.warnings += r.outcome.warnings.len();
                acc
            },
        )
    }

    #[must_use]
    pub const fn no_files(&self) -> bool {
        self.files_checked == 0
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }

    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.warnings > 0
    }
}
