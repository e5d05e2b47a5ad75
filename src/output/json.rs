use serde::Serialize;

use crate::aggregate::{AnalysisReport, Breakdown};
use crate::counter::LineCounts;
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    languages: Option<Vec<LanguageEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileEntry>>,
    elapsed_ms: u128,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    unreadable_files: usize,
    skipped_entries: usize,
    invalid_paths: usize,
    lines: Lines,
}

#[derive(Serialize)]
struct Lines {
    total: usize,
    blank: usize,
    comment: usize,
    code: usize,
}

impl From<LineCounts> for Lines {
    fn from(counts: LineCounts) -> Self {
        Self {
            total: counts.total(),
            blank: counts.blank,
            comment: counts.comment,
            code: counts.code,
        }
    }
}

#[derive(Serialize)]
struct LanguageEntry {
    language: &'static str,
    files: usize,
    lines: Lines,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    lines: Lines,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let (languages, files) = match &report.breakdown {
            Breakdown::ByType(_) => (Some(convert_languages(report)), None),
            Breakdown::PerFile(_) => (None, Some(convert_files(report))),
        };

        let output = JsonOutput {
            summary: Summary {
                files: report.files,
                unreadable_files: report.unreadable,
                skipped_entries: report.walk.skipped_entries,
                invalid_paths: report.walk.invalid_roots,
                lines: report.grand_total.into(),
            },
            languages,
            files,
            elapsed_ms: report.elapsed.as_millis(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_languages(report: &AnalysisReport) -> Vec<LanguageEntry> {
    report
        .types_by_size()
        .into_iter()
        .map(|(file_type, totals)| LanguageEntry {
            language: file_type.name(),
            files: totals.files,
            lines: totals.counts.into(),
        })
        .collect()
}

fn convert_files(report: &AnalysisReport) -> Vec<FileEntry> {
    report
        .files_by_size()
        .into_iter()
        .map(|(path, counts)| FileEntry {
            path: path.display().to_string(),
            lines: counts.into(),
        })
        .collect()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
