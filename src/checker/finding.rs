use std::fmt;

use serde::Serialize;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Identifies which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    VersionDirective,
    PlotInConditional,
    DeprecatedTransp,
    UnreadableFile,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VersionDirective => "version-directive",
            Self::PlotInConditional => "plot-in-conditional",
            Self::DeprecatedTransp => "deprecated-transp",
            Self::UnreadableFile => "unreadable-file",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message produced by one check against one document.
///
/// `line` is 1-based and only set for findings tied to a specific line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    pub line: Option<usize>,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
