pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use error::{PineGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// Errors were found (or warnings, in strict mode).
pub const EXIT_ISSUES_FOUND: i32 = 1;
/// No matching files were found under the scanned paths.
pub const EXIT_NO_FILES: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
