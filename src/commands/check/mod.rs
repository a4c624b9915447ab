mod check_exit;
mod check_processing;
mod runner;

pub use runner::run_check;

// Re-export internal items for tests
#[cfg(test)]
pub(crate) use check_exit::determine_exit_code;
#[cfg(test)]
pub(crate) use check_processing::{process_file, process_files};
#[cfg(test)]
pub(crate) use runner::{apply_cli_overrides, format_output, run_check_impl};
