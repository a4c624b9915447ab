use std::fs;

use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PineGuardError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), None, None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PineGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# pine-guard configuration file

[scanner]
# Respect .gitignore rules while scanning (default: false)
gitignore = false

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/.git/**",
]

[check]
# File extensions treated as Pine Script sources
extensions = ["pine"]

# Strict mode: warnings also fail the run (default: false)
# strict = true
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
