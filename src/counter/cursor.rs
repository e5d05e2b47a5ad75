use std::io::{ErrorKind, Read};

/// Size of the chunks pulled from a reader (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Pull interface over a byte stream: the next byte, or end of stream.
pub trait ByteCursor {
    /// Consume and return the next byte.
    fn next_byte(&mut self) -> Option<u8>;

    /// Return the next byte without consuming it.
    fn peek_byte(&mut self) -> Option<u8>;
}

/// Cursor over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl ByteCursor for SliceCursor<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    fn peek_byte(&mut self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
}

/// Cursor that streams a reader through a fixed-size buffer.
///
/// Memory use is bounded by the chunk size regardless of the input length.
/// A read error ends the stream; it is kept and can be taken afterwards
/// with [`ChunkedReader::take_error`].
pub struct ChunkedReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
    done: bool,
    error: Option<std::io::Error>,
}

impl<R: Read> ChunkedReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_chunk_size(inner, CHUNK_SIZE)
    }

    /// Create a reader with a custom chunk size (at least one byte).
    #[must_use]
    pub fn with_chunk_size(inner: R, chunk_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0; chunk_size.max(1)].into_boxed_slice(),
            pos: 0,
            len: 0,
            done: false,
            error: None,
        }
    }

    /// The read error that ended the stream early, if any.
    pub const fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Make sure at least one unread byte is buffered. Returns false at end of stream.
    fn fill(&mut self) -> bool {
        if self.pos < self.len {
            return true;
        }
        while !self.done {
            match self.inner.read(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return true;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    self.done = true;
                }
            }
        }
        false
    }
}

impl<R: Read> ByteCursor for ChunkedReader<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if !self.fill() {
            return None;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Some(byte)
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if !self.fill() {
            return None;
        }
        Some(self.buf[self.pos])
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
