use serde::Serialize;

use crate::checker::{FileResult, Finding, RuleId, RunSummary};
use crate::error::Result;

use super::{OutputFormatter, display_path};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<JsonFileResult>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonFileResult {
    path: String,
    errors: Vec<JsonFinding>,
    warnings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct JsonFinding {
    rule: RuleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[FileResult]) -> Result<String> {
        let summary = RunSummary::from_results(results);

        let output = JsonOutput {
            summary: Summary {
                files_checked: summary.files_checked,
                errors: summary.errors,
                warnings: summary.warnings,
            },
            results: results.iter().map(convert_result).collect(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

fn convert_result(result: &FileResult) -> JsonFileResult {
    JsonFileResult {
        path: display_path(result.path()),
        errors: result.outcome.errors.iter().map(convert_finding).collect(),
        warnings: result.outcome.warnings.iter().map(convert_finding).collect(),
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding {
    JsonFinding {
        rule: finding.rule,
        line: finding.line,
        message: finding.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
