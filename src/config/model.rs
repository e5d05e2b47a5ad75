use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Settings read from `.csloc.toml` or the user config file.
///
/// Every section and key is optional; unknown keys are rejected so typos
/// surface as errors instead of being silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Worker threads; absent means one per CPU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Report per file instead of per language.
    #[serde(default)]
    pub per_file: bool,

    #[serde(default = "default_true")]
    pub follow_links: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threads: None,
            per_file: false,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
