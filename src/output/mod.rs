mod error_output;
mod json;
mod progress;
mod sink;
mod text;

pub use error_output::{ErrorOutput, print_error_full, print_note, print_warning_full};
pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use sink::OutputSink;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

use crate::aggregate::AnalysisReport;
use crate::error::Result;

/// ANSI escape codes shared by the terminal writers.
pub(crate) mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders a finished analysis.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
