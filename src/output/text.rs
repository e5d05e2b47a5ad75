use std::fmt::Write;
use std::time::Duration;

use crate::aggregate::{AggregationMode, AnalysisReport};
use crate::counter::LineCounts;
use crate::error::Result;

use super::ReportFormatter;

const TYPE_RULE_WIDTH: usize = 79;
const FILE_RULE_WIDTH: usize = 140;

/// Plain-text tables in the classic `cloc` layout.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        write_timing(&mut output, report);
        match report.mode() {
            AggregationMode::ByType => write_by_type(&mut output, report),
            AggregationMode::PerFile => write_per_file(&mut output, report),
        }
        write_skipped(&mut output, report);
        Ok(output)
    }
}

/// Items per second, computed in nanoseconds so sub-millisecond runs
/// still produce a rate.
fn per_second(count: usize, elapsed: Duration) -> u128 {
    let nanos = elapsed.as_nanos().max(1);
    (count as u128 * 1_000_000_000) / nanos
}

fn write_timing(output: &mut String, report: &AnalysisReport) {
    let _ = writeln!(
        output,
        "Analysis completed in {} ms ({} files/s, {} lines/s)",
        report.elapsed.as_millis(),
        per_second(report.files, report.elapsed),
        per_second(report.grand_total.total(), report.elapsed),
    );
}

fn rule(output: &mut String, width: usize) {
    output.push_str(&"-".repeat(width));
    output.push('\n');
}

fn write_by_type(output: &mut String, report: &AnalysisReport) {
    rule(output, TYPE_RULE_WIDTH);
    let _ = writeln!(
        output,
        "{:<20} {:>13} {:>14} {:>14} {:>14}",
        "Language", "files", "blank", "comment", "code"
    );
    rule(output, TYPE_RULE_WIDTH);

    for (file_type, totals) in report.types_by_size() {
        write_type_row(output, file_type.name(), totals.files, totals.counts);
    }

    rule(output, TYPE_RULE_WIDTH);
    write_type_row(output, "Total", report.files, report.grand_total);
    rule(output, TYPE_RULE_WIDTH);
}

fn write_type_row(output: &mut String, label: &str, files: usize, counts: LineCounts) {
    let _ = writeln!(
        output,
        "{label:<20} {files:>13} {:>14} {:>14} {:>14}",
        counts.blank, counts.comment, counts.code
    );
}

fn write_per_file(output: &mut String, report: &AnalysisReport) {
    let _ = writeln!(output, "Total files analyzed: {}", report.files);
    rule(output, FILE_RULE_WIDTH);
    let _ = writeln!(
        output,
        "{:<95} {:>14} {:>14} {:>14}",
        "file", "blank", "comment", "code"
    );
    rule(output, FILE_RULE_WIDTH);

    for (path, counts) in report.files_by_size() {
        write_file_row(output, &path.display().to_string(), counts);
    }

    rule(output, FILE_RULE_WIDTH);
    write_file_row(output, "Total", report.grand_total);
    rule(output, FILE_RULE_WIDTH);
}

fn write_file_row(output: &mut String, label: &str, counts: LineCounts) {
    let _ = writeln!(
        output,
        "{label:<95} {:>14} {:>14} {:>14}",
        counts.blank, counts.comment, counts.code
    );
}

fn write_skipped(output: &mut String, report: &AnalysisReport) {
    let skipped = report.unreadable + report.walk.skipped_entries + report.walk.invalid_roots;
    if skipped == 0 {
        return;
    }
    let _ = writeln!(
        output,
        "Skipped: {} unreadable files, {} unreadable entries, {} invalid paths",
        report.unreadable, report.walk.skipped_entries, report.walk.invalid_roots
    );
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
