//! Diagnostics on stderr: errors, warnings and informational notes.
//!
//! Format: `✖ {type}: {message}` / `⚠ Warning: {message}` / `note: {message}`,
//! each optionally followed by `  × {detail}` and `  help: {suggestion}`.
//! Worker threads report through this module too; each diagnostic is
//! written under one stderr lock so lines from different threads do not
//! interleave.

use std::io::{IsTerminal, Write};

use super::ansi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    const fn color(self) -> &'static str {
        match self {
            Self::Error => ansi::RED,
            Self::Warning => ansi::YELLOW,
            Self::Note => ansi::CYAN,
        }
    }
}

/// Diagnostic writer with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a writer that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    /// Creates a writer with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Per <https://no-color.org>: presence of the variable disables color.
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = format!("✖ {error_type}:");
        self.write_diagnostic(w, Level::Error, &heading, message, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_diagnostic(w, Level::Warning, "⚠ Warning:", message, detail, suggestion);
    }

    pub fn write_note<W: Write>(&self, w: &mut W, message: &str) {
        self.write_diagnostic(w, Level::Note, "note:", message, None, None);
    }

    fn write_diagnostic<W: Write>(
        &self,
        w: &mut W,
        level: Level,
        heading: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write a diagnostic to stderr is not itself reportable.
        let mut text = if self.use_colors {
            format!(
                "{}{}{heading}{} {message}\n",
                ansi::BOLD,
                level.color(),
                ansi::RESET
            )
        } else {
            format!("{heading} {message}\n")
        };

        if let Some(d) = detail {
            if self.use_colors {
                text.push_str(&format!("  {}× {d}{}\n", ansi::DIM, ansi::RESET));
            } else {
                text.push_str(&format!("  × {d}\n"));
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                text.push_str(&format!("  {}help:{} {s}\n", ansi::CYAN, ansi::RESET));
            } else {
                text.push_str(&format!("  help: {s}\n"));
            }
        }

        let _ = w.write_all(text.as_bytes());
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error with optional detail and suggestion to stderr.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_error(&mut stderr, error_type, message, detail, suggestion);
}

/// Prints a warning with optional detail and suggestion to stderr.
pub fn print_warning_full(message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_warning(&mut stderr, message, detail, suggestion);
}

/// Prints an informational note to stderr.
pub fn print_note(message: &str) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_note(&mut stderr, message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
