//! Thread-safe accumulation of per-file results.
//!
//! One mutex guards every total. Workers hold it only for the in-memory
//! merge, never across file I/O. Merges commute, so the order in which
//! workers finish does not affect the final numbers.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::counter::LineCounts;
use crate::language::FileType;
use crate::scanner::{AnalysisTask, WalkSummary};

/// How results are broken down besides the grand total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationMode {
    #[default]
    ByType,
    PerFile,
}

/// Totals for one file category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTotals {
    pub counts: LineCounts,
    pub files: usize,
}

/// The mode-specific part of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakdown {
    ByType(BTreeMap<FileType, TypeTotals>),
    PerFile(BTreeMap<PathBuf, LineCounts>),
}

/// Final, immutable result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub grand_total: LineCounts,
    pub files: usize,
    /// Files that were discovered but could not be read.
    pub unreadable: usize,
    pub walk: WalkSummary,
    pub breakdown: Breakdown,
    pub elapsed: Duration,
}

impl AnalysisReport {
    #[must_use]
    pub const fn mode(&self) -> AggregationMode {
        match self.breakdown {
            Breakdown::ByType(_) => AggregationMode::ByType,
            Breakdown::PerFile(_) => AggregationMode::PerFile,
        }
    }

    /// Rows for a by-type report, largest total first; ties keep category order.
    #[must_use]
    pub fn types_by_size(&self) -> Vec<(FileType, TypeTotals)> {
        let Breakdown::ByType(map) = &self.breakdown else {
            return Vec::new();
        };
        let mut rows: Vec<_> = map.iter().map(|(t, totals)| (*t, *totals)).collect();
        rows.sort_by(|a, b| b.1.counts.total().cmp(&a.1.counts.total()));
        rows
    }

    /// Rows for a per-file report, largest total first; ties keep path order.
    #[must_use]
    pub fn files_by_size(&self) -> Vec<(&PathBuf, LineCounts)> {
        let Breakdown::PerFile(map) = &self.breakdown else {
            return Vec::new();
        };
        let mut rows: Vec<_> = map.iter().map(|(p, counts)| (p, *counts)).collect();
        rows.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        rows
    }
}

#[derive(Debug, Default)]
struct Totals {
    per_file: BTreeMap<PathBuf, LineCounts>,
    by_type: BTreeMap<FileType, TypeTotals>,
    grand_total: LineCounts,
    files: usize,
    unreadable: usize,
}

#[derive(Debug)]
pub struct Aggregator {
    mode: AggregationMode,
    totals: Mutex<Totals>,
}

impl Aggregator {
    #[must_use]
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            totals: Mutex::new(Totals::default()),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Merge one analyzed file.
    pub fn record(&self, task: AnalysisTask, counts: LineCounts) {
        // Every merge is complete or absent, so a poisoned lock still holds
        // consistent totals.
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        match self.mode {
            AggregationMode::PerFile => {
                totals.per_file.insert(task.path, counts);
            }
            AggregationMode::ByType => {
                let entry = totals.by_type.entry(task.file_type).or_default();
                entry.counts += counts;
                entry.files += 1;
            }
        }
        totals.grand_total += counts;
        totals.files += 1;
    }

    /// Note a discovered file that contributed nothing because it could not be read.
    pub fn record_unreadable(&self) {
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        totals.unreadable += 1;
    }

    /// Freeze the totals. Taking `self` by value means no worker can still
    /// be holding a reference.
    #[must_use]
    pub fn into_report(self, walk: WalkSummary, elapsed: Duration) -> AnalysisReport {
        let totals = self
            .totals
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        Self::build_report(self.mode, totals, walk, elapsed)
    }

    fn build_report(
        mode: AggregationMode,
        totals: Totals,
        walk: WalkSummary,
        elapsed: Duration,
    ) -> AnalysisReport {
        let breakdown = match mode {
            AggregationMode::PerFile => Breakdown::PerFile(totals.per_file),
            AggregationMode::ByType => Breakdown::ByType(totals.by_type),
        };
        AnalysisReport {
            grand_total: totals.grand_total,
            files: totals.files,
            unreadable: totals.unreadable,
            walk,
            breakdown,
            elapsed,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
