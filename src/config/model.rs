use serde::{Deserialize, Serialize};

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: false, every matching file is checked)
    #[serde(default)]
    pub gitignore: bool,

    /// Exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Settings for the compliance check itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// File extensions treated as Pine Script sources.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Strict mode: warnings also fail the run.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["pine".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
