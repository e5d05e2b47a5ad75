mod filter;
mod walker;

pub use filter::{FileFilter, GlobFilter};
pub use walker::{AnalysisTask, DirectoryWalker, WalkSummary};
