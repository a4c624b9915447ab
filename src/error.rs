use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PineGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PineGuardError {
    /// Short category name used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Configuration error",
            Self::FileRead { .. } | Self::Io(_) => "IO error",
            Self::InvalidPattern { .. } => "Invalid pattern",
            Self::PathNotFound(_) => "Path not found",
            Self::JsonSerialize(_) => "Serialization error",
        }
    }

    /// Message without the category prefix, including the source cause if any.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::InvalidPattern { pattern, source } => format!("'{pattern}': {source}"),
            Self::PathNotFound(path) => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Actionable hint shown under the error, when one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TomlParse(_) | Self::Config(_) => {
                Some("check the config file, or pass --no-config to use defaults")
            }
            Self::InvalidPattern { .. } => Some("exclude patterns use glob syntax, e.g. **/vendor/**"),
            Self::PathNotFound(_) => Some("pass an existing file or directory to check"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PineGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
