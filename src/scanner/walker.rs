use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::language::FileType;
use crate::output::print_warning_full;

use super::FileFilter;

/// An owned unit of analysis handed to the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTask {
    pub path: PathBuf,
    pub file_type: FileType,
}

/// What a walk discovered and what it had to skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Files handed to the submit callback.
    pub submitted: usize,
    /// Entries that could not be read during the walk.
    pub skipped_entries: usize,
    /// Root arguments that did not exist or could not be inspected.
    pub invalid_roots: usize,
    /// Files reached a second time through overlapping roots or links.
    pub duplicates: usize,
}

impl WalkSummary {
    pub const fn merge(&mut self, other: Self) {
        self.submitted += other.submitted;
        self.skipped_entries += other.skipped_entries;
        self.invalid_roots += other.invalid_roots;
        self.duplicates += other.duplicates;
    }
}

/// Recursively discovers C-family sources and submits one task per file.
///
/// Symbolic links are followed by default. A link that points back at one
/// of its ancestors is reported as an unreadable entry instead of being
/// walked again.
///
/// Each physical file is submitted at most once per walker, however many
/// roots or links reach it.
pub struct DirectoryWalker<F: FileFilter> {
    filter: F,
    follow_links: bool,
    seen: HashSet<PathBuf>,
}

impl<F: FileFilter> DirectoryWalker<F> {
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            follow_links: true,
            seen: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Walk one root argument, which may be a file or a directory.
    ///
    /// Problems are reported on stderr and counted; they never stop the walk.
    pub fn walk_root<S>(&mut self, root: &Path, submit: &mut S) -> WalkSummary
    where
        S: FnMut(AnalysisTask),
    {
        let mut summary = WalkSummary::default();

        let metadata = match std::fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                print_warning_full(
                    &format!("Path does not exist: {}", root.display()),
                    None,
                    None,
                );
                summary.invalid_roots += 1;
                return summary;
            }
            Err(e) => {
                print_warning_full(
                    &format!("Error accessing path {}", root.display()),
                    Some(&e.to_string()),
                    None,
                );
                summary.invalid_roots += 1;
                return summary;
            }
        };

        if metadata.is_dir() {
            self.walk_dir(root, &mut summary, submit);
        } else if metadata.is_file()
            && let Some(task) = candidate(&self.filter, root.to_path_buf())
        {
            submit_once(&mut self.seen, task, &mut summary, submit);
        }

        summary
    }

    fn walk_dir<S>(&mut self, root: &Path, summary: &mut WalkSummary, submit: &mut S)
    where
        S: FnMut(AnalysisTask),
    {
        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !e.file_type().is_dir() || self.filter.should_descend(e.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let location = e
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                    print_warning_full(
                        &format!("Skipping unreadable entry: {location}"),
                        Some(&e.to_string()),
                        None,
                    );
                    summary.skipped_entries += 1;
                    continue;
                }
            };

            if entry.file_type().is_file()
                && let Some(task) = candidate(&self.filter, entry.into_path())
            {
                submit_once(&mut self.seen, task, summary, submit);
            }
        }
    }
}

/// A task for `path` if it is a recognized source the filter keeps.
fn candidate<F: FileFilter>(filter: &F, path: PathBuf) -> Option<AnalysisTask> {
    let file_type = FileType::from_path(&path);
    (file_type.is_known() && filter.should_include(&path)).then_some(AnalysisTask { path, file_type })
}

fn submit_once<S>(
    seen: &mut HashSet<PathBuf>,
    task: AnalysisTask,
    summary: &mut WalkSummary,
    submit: &mut S,
) where
    S: FnMut(AnalysisTask),
{
    // Links and `.`/`..` segments resolve to one key; a file that vanished
    // since it was listed keeps its walked path.
    let key = dunce::canonicalize(&task.path).unwrap_or_else(|_| task.path.clone());
    if !seen.insert(key) {
        summary.duplicates += 1;
        return;
    }
    summary.submitted += 1;
    submit(task);
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
