use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CslocError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should enter `dir` at all.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Excludes paths matching any of a set of glob patterns.
///
/// Patterns are matched against paths as the walker produces them, i.e.
/// joined onto the root argument the user passed.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CslocError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| CslocError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    /// A filter that excludes nothing.
    #[must_use]
    pub fn accept_all() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
