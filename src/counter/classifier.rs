use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CslocError, Result};

use super::LineCounts;
use super::cursor::{ByteCursor, ChunkedReader, SliceCursor};

/// Lexical modes plus per-line bookkeeping for the C-family line classifier.
///
/// Block and line comment modes never overlap, and neither do string and
/// char literal modes. Block comment mode survives line ends; the others
/// are either cleared at a newline or persist only through an escape.
#[derive(Debug, Default)]
struct LexState {
    in_block_comment: bool,
    in_line_comment: bool,
    in_string: bool,
    in_char: bool,
    non_blank: bool,
    has_code: bool,
    counts: LineCounts,
}

impl LexState {
    const fn in_comment(&self) -> bool {
        self.in_block_comment || self.in_line_comment
    }

    const fn in_literal(&self) -> bool {
        self.in_string || self.in_char
    }

    const fn mark_code(&mut self) {
        self.non_blank = true;
        self.has_code = true;
    }

    /// A visible character: code outside comments, comment text inside.
    const fn mark_visible(&mut self) {
        self.non_blank = true;
        if !self.in_comment() {
            self.has_code = true;
        }
    }

    const fn finish_line(&mut self) {
        if !self.non_blank {
            self.counts.blank += 1;
        } else if self.has_code {
            self.counts.code += 1;
        } else {
            self.counts.comment += 1;
        }
        self.non_blank = false;
        self.has_code = false;
    }

    fn on_slash<C: ByteCursor>(&mut self, cursor: &mut C) {
        if self.in_literal() {
            self.mark_code();
            return;
        }
        if !self.in_comment() {
            match cursor.peek_byte() {
                Some(b'*') => {
                    cursor.next_byte();
                    self.in_block_comment = true;
                    self.non_blank = true;
                    return;
                }
                Some(b'/') => {
                    cursor.next_byte();
                    self.in_line_comment = true;
                    self.non_blank = true;
                    return;
                }
                _ => {}
            }
        }
        self.mark_visible();
    }

    fn on_star<C: ByteCursor>(&mut self, cursor: &mut C) {
        if self.in_block_comment && cursor.peek_byte() == Some(b'/') {
            cursor.next_byte();
            self.in_block_comment = false;
            self.non_blank = true;
            return;
        }
        self.mark_visible();
    }

    const fn on_double_quote(&mut self) {
        if self.in_comment() || self.in_char {
            self.mark_visible();
            return;
        }
        self.in_string = !self.in_string;
        self.mark_code();
    }

    const fn on_single_quote(&mut self) {
        if self.in_comment() || self.in_string {
            self.mark_visible();
            return;
        }
        self.in_char = !self.in_char;
        self.mark_code();
    }

    fn on_backslash<C: ByteCursor>(&mut self, cursor: &mut C) {
        if self.in_comment() {
            self.non_blank = true;
            return;
        }
        if self.in_literal() {
            self.mark_code();
            // The escaped byte never toggles a mode, but an escaped newline
            // still ends a physical line.
            if cursor.next_byte() == Some(b'\n') {
                self.finish_line();
            }
            return;
        }
        if cursor.peek_byte() == Some(b'\n') {
            // Line continuation: the backslash is code, the line ends here,
            // modes carry over.
            self.mark_code();
            self.finish_line();
            cursor.next_byte();
            return;
        }
        self.mark_code();
    }

    fn step<C: ByteCursor>(&mut self, byte: u8, cursor: &mut C) {
        match byte {
            b'\n' => {
                self.finish_line();
                self.in_line_comment = false;
            }
            b'/' => self.on_slash(cursor),
            b'*' => self.on_star(cursor),
            b'"' => self.on_double_quote(),
            b'\'' => self.on_single_quote(),
            b'\\' => self.on_backslash(cursor),
            b' ' | b'\t' | b'\r' => {}
            _ => self.mark_visible(),
        }
    }
}

/// Classify every physical line pulled from `cursor`.
///
/// A final line without a terminator is counted when it has any visible
/// content; trailing whitespace after the last newline is not a line.
pub fn classify<C: ByteCursor>(cursor: &mut C) -> LineCounts {
    let mut state = LexState::default();
    while let Some(byte) = cursor.next_byte() {
        state.step(byte, cursor);
    }
    if state.non_blank {
        state.finish_line();
    }
    state.counts
}

/// Classify an in-memory buffer.
#[must_use]
pub fn count_bytes(bytes: &[u8]) -> LineCounts {
    classify(&mut SliceCursor::new(bytes))
}

/// Classify a reader in fixed-size chunks.
///
/// # Errors
/// Returns the first read error; no partial counts are produced.
pub fn count_reader<R: Read>(reader: R) -> std::io::Result<LineCounts> {
    let mut cursor = ChunkedReader::new(reader);
    let counts = classify(&mut cursor);
    match cursor.take_error() {
        Some(e) => Err(e),
        None => Ok(counts),
    }
}

/// Open and classify a file.
///
/// # Errors
/// Returns [`CslocError::FileRead`] if the file cannot be opened or read.
pub fn analyze_file(path: &Path) -> Result<LineCounts> {
    let to_error = |source| CslocError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    count_reader(file).map_err(to_error)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
