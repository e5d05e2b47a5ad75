//! Line classification for C-family sources.
//!
//! The classifier is a byte-level state machine that tracks comments,
//! string literals and char literals, and nothing else.

mod classifier;
mod counts;
mod cursor;

pub use classifier::{analyze_file, classify, count_bytes, count_reader};
pub use counts::LineCounts;
pub use cursor::{ByteCursor, CHUNK_SIZE, ChunkedReader, SliceCursor};
