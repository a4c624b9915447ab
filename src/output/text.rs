use std::io::Write;

use crate::checker::{FileResult, Finding, RunSummary};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, display_path, is_no_color_set};

const RULE: &str =
    "======================================================================";
const TITLE: &str = "Pine Script v6 Compliance Check";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_banner(output: &mut Vec<u8>) {
        writeln!(output, "{RULE}").ok();
        writeln!(output, "{TITLE}").ok();
        writeln!(output, "{RULE}").ok();
        writeln!(output).ok();
    }

    fn write_finding(&self, finding: &Finding, output: &mut Vec<u8>) {
        if self.verbose >= 1 {
            let rule = self.colorize(&format!("[{}]", finding.rule), ansi::CYAN);
            writeln!(output, "     - {finding} {rule}").ok();
        } else {
            writeln!(output, "     - {finding}").ok();
        }
    }

    fn format_result(&self, result: &FileResult, output: &mut Vec<u8>) {
        writeln!(output, "📄 Checking: {}", display_path(result.path())).ok();

        let outcome = &result.outcome;
        if !outcome.errors.is_empty() {
            let heading = format!("Errors ({}):", outcome.errors.len());
            writeln!(output, "  ❌ {}", self.colorize(&heading, ansi::RED)).ok();
            for finding in &outcome.errors {
                self.write_finding(finding, output);
            }
        }

        if !outcome.warnings.is_empty() {
            let heading = format!("Warnings ({}):", outcome.warnings.len());
            writeln!(output, "  ⚠️  {}", self.colorize(&heading, ansi::YELLOW)).ok();
            for finding in &outcome.warnings {
                self.write_finding(finding, output);
            }
        }

        if outcome.is_clean() {
            writeln!(output, "  ✅ {}", self.colorize("No issues found", ansi::GREEN)).ok();
        }

        writeln!(output).ok();
    }

    fn format_summary(&self, summary: &RunSummary, output: &mut Vec<u8>) {
        let errors = self.colorize(&summary.errors.to_string(), ansi::RED);
        let warnings = self.colorize(&summary.warnings.to_string(), ansi::YELLOW);

        writeln!(output, "{RULE}").ok();
        writeln!(output, "Summary: {} files checked", summary.files_checked).ok();
        writeln!(output, "  ❌ Errors: {errors}").ok();
        writeln!(output, "  ⚠️  Warnings: {warnings}").ok();
        writeln!(output, "{RULE}").ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[FileResult]) -> Result<String> {
        let mut output = Vec::new();
        Self::write_banner(&mut output);

        if results.is_empty() {
            let message = self.colorize("No Pine Script files found!", ansi::RED);
            writeln!(output, "❌ {message}").ok();
            return Ok(String::from_utf8_lossy(&output).to_string());
        }

        for result in results {
            self.format_result(result, &mut output);
        }

        self.format_summary(&RunSummary::from_results(results), &mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
