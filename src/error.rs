use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CslocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output file: {path}")]
    OutputOpen {
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

    #[error("Failed to spawn worker thread")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CslocError {
    /// Short category name used as the heading of a diagnostic.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::OutputOpen { .. } => "Output",
            Self::InvalidPattern { .. } => "Pattern",
            Self::WorkerSpawn(_) => "Worker",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// The underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. }
            | Self::OutputOpen { source, .. }
            | Self::WorkerSpawn(source) => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// A hint for the user, when there is an obvious fix.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::OutputOpen { .. } => Some("Check that the output directory exists and is writable"),
            Self::InvalidPattern { .. } => Some("Exclude patterns use glob syntax, e.g. \"**/build/**\""),
            Self::TomlParse(_) => Some("Run with --no-config to ignore configuration files"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CslocError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
