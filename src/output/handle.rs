use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// A writable destination that can report whether it is open.
pub trait OutputHandle: Write {
    fn is_open(&self) -> bool;
}

/// An output file that may or may not currently be open.
///
/// Writes are buffered; `close` flushes them and releases the file. Once
/// closed, every `Write` call fails with `io::ErrorKind::NotConnected`.
#[derive(Debug, Default)]
pub struct OutputFile {
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
}

impl OutputFile {
    /// Opens `path` for writing, creating it or truncating existing contents.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::from_file(file, path.as_ref()))
    }

    /// Opens `path` for appending, creating it if missing.
    pub fn append<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(file, path.as_ref()))
    }

    /// A handle that was never opened.
    pub fn closed() -> Self {
        Self::default()
    }

    fn from_file(file: File, path: &Path) -> Self {
        debug!(path = %path.display(), "output file opened");
        Self {
            writer: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        }
    }

    /// Path the handle was opened with, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flushes pending bytes and releases the file. Closing twice is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        if let Some(mut w) = self.writer.take() {
            w.flush()?;
            if let Some(path) = &self.path {
                debug!(path = %path.display(), "output file closed");
            }
        }
        Ok(())
    }
}

fn not_open() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "output file is not open")
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.writer {
            Some(w) => w.write(buf),
            None => Err(not_open()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.writer {
            Some(w) => w.flush(),
            None => Err(not_open()),
        }
    }
}

impl OutputHandle for OutputFile {
    fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

// A live `File` value always refers to an open descriptor.
impl OutputHandle for File {
    fn is_open(&self) -> bool {
        true
    }
}

impl OutputHandle for Vec<u8> {
    fn is_open(&self) -> bool {
        true
    }
}
