use std::sync::LazyLock;

use regex::Regex;

use super::finding::{Finding, RuleId};

/// Language version every script is expected to declare.
pub const TARGET_VERSION: &str = "6";

static VERSION_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//@version=(\d+)").expect("version directive pattern is valid"));

/// Returns the digits of the first `//@version=<N>` directive in `text`.
#[must_use]
pub fn find_version(text: &str) -> Option<&str> {
    VERSION_DIRECTIVE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Checks the version directive. Yields at most one finding.
#[must_use]
pub fn check_version(text: &str) -> Option<Finding> {
    match find_version(text) {
        None => Some(Finding::error(
            RuleId::VersionDirective,
            "No version directive found",
        )),
        Some(version) if version != TARGET_VERSION => Some(Finding::warning(
            RuleId::VersionDirective,
            format!("Using version {version} instead of {TARGET_VERSION}"),
        )),
        Some(_) => None,
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
