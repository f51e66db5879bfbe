use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

/// Any destination lines can be written to.
pub type Sink = Box<dyn Write + Send>;

/// A line-oriented writer shared between threads.
/// A line goes out in a single write and is flushed while holding the lock, so lines
/// never interleave, even with other writers of the same stream.
pub struct SharedSink {
    inner: Mutex<Sink>,
}

impl SharedSink {
    pub fn new(sink: Sink) -> Self {
        Self {
            inner: Mutex::new(sink),
        }
    }

    /// A sink writing to the standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// A sink writing to the standard error.
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Writes a whole line followed by a newline.
    pub fn write_line(&self, line: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_raw_line(line.to_string().as_bytes())
    }

    /// Writes raw bytes followed by a newline.
    pub fn write_raw_line(&self, line: &[u8]) -> io::Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line);
        buf.push(b'\n');

        let mut sink = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(&buf)?;
        sink.flush()
    }
}

impl fmt::Debug for SharedSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSink").finish_non_exhaustive()
    }
}
