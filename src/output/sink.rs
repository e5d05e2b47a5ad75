use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{CslocError, Result};

/// Where the finished report goes.
///
/// The sink is opened before any analysis starts, so a bad output path
/// fails fast instead of after a long walk.
pub enum OutputSink {
    Stdout(Stdout),
    File { path: PathBuf, writer: BufWriter<File> },
}

impl OutputSink {
    /// Open stdout, or create `path` (and any missing parent directories).
    ///
    /// # Errors
    /// Returns `CslocError::OutputOpen` if the file cannot be created.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(io::stdout()));
        };

        let open_error = |source| CslocError::OutputOpen {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(open_error)?;
        }
        let file = File::create(path).map_err(open_error)?;

        Ok(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// The destination file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout(_) => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// Write the whole report and flush it.
    ///
    /// # Errors
    /// Returns an IO error if writing or flushing fails.
    pub fn write_report(&mut self, content: &str) -> Result<()> {
        self.write_all(content.as_bytes())?;
        self.flush()?;
        Ok(())
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stdout) => stdout.lock().write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
