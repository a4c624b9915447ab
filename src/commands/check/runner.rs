use crate::EXIT_CONFIG_ERROR;
use crate::checker::{FileResult, RunSummary};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, display_path,
    print_error_full, print_note,
};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};

use super::check_exit::determine_exit_code;
use super::check_processing::process_files;
use crate::commands::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), None, e.suggestion());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run a check and return the process exit code.
///
/// # Errors
/// Returns an error for configuration problems, invalid globs, missing paths,
/// or a failure writing the report.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose >= 1 {
        match &loaded.source {
            Some(path) => print_note(&format!("using config {}", display_path(path))),
            None => print_note("no config file found, using defaults"),
        }
    }
    let mut config = loaded.config;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Discover files
    let filter = GlobFilter::new(config.check.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    let files = scanner.scan_all(&args.paths)?;
    if cli.verbose >= 1 {
        print_note(&format!("found {} file(s) to check", files.len()));
    }

    // 4. Check each file in order
    let results = process_files(&files);

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    let summary = RunSummary::from_results(&results);
    Ok(determine_exit_code(
        &summary,
        args.warn_only,
        config.check.strict,
    ))
}

/// Merge CLI flags into the loaded configuration. CLI wins.
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref extensions) = args.ext {
        config.check.extensions.clone_from(extensions);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.gitignore {
        config.scanner.gitignore = true;
    }

    if args.strict {
        config.check.strict = true;
    }
}

/// Render results with the selected formatter.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    results: &[FileResult],
    color_mode: ColorMode,
    verbose: u8,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}
