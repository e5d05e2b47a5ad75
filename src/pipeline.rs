//! One analysis run: walk the roots, classify files on the worker pool,
//! and collect the totals once the pool has drained.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::{AggregationMode, Aggregator, AnalysisReport};
use crate::counter::analyze_file;
use crate::error::{CslocError, Result};
use crate::output::{ScanProgress, print_warning_full};
use crate::pool::{WorkerPool, default_size};
use crate::scanner::{AnalysisTask, DirectoryWalker, FileFilter, WalkSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub mode: AggregationMode,
    /// Worker count; `None` means one per CPU.
    pub threads: Option<usize>,
    pub follow_links: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            mode: AggregationMode::ByType,
            threads: None,
            follow_links: true,
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(default_size).max(1)
    }
}

/// Analyze every root and return the finished report.
///
/// Roots are walked in order on the calling thread while workers classify
/// files concurrently. Missing roots, unreadable entries and unreadable
/// files are reported as warnings and counted in the report.
///
/// # Errors
/// Returns an error if the worker pool cannot be created.
pub fn run<F: FileFilter>(
    roots: &[PathBuf],
    options: &AnalysisOptions,
    filter: F,
    progress: &ScanProgress,
) -> Result<AnalysisReport> {
    let aggregator = Arc::new(Aggregator::new(options.mode));
    let pool = WorkerPool::new(options.worker_count())?;
    let mut walker = DirectoryWalker::new(filter).with_follow_links(options.follow_links);

    let start = Instant::now();
    let mut walk = WalkSummary::default();

    let mut submit = |task: AnalysisTask| {
        let aggregator = Arc::clone(&aggregator);
        let progress = progress.clone();
        pool.submit(move || {
            match analyze_file(&task.path) {
                Ok(counts) => aggregator.record(task, counts),
                Err(e) => {
                    let detail = std::error::Error::source(&e).map(ToString::to_string);
                    print_warning_full(&e.to_string(), detail.as_deref(), None);
                    aggregator.record_unreadable();
                }
            }
            progress.inc();
        });
    };

    for root in roots {
        walk.merge(walker.walk_root(root, &mut submit));
    }

    // Joining the workers is the barrier: after this no task holds the
    // aggregator.
    let panicked = pool.shutdown();
    let elapsed = start.elapsed();

    if panicked > 0 {
        print_warning_full(
            &format!("{panicked} file(s) could not be analyzed"),
            Some("a worker task panicked"),
            None,
        );
    }

    let aggregator = Arc::into_inner(aggregator).ok_or_else(|| {
        CslocError::Io(std::io::Error::other(
            "aggregator still shared after the worker pool shut down",
        ))
    })?;
    Ok(aggregator.into_report(walk, elapsed))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
