use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::Context as _;

use crate::foundation::error::SceneResult;

/// Destination of protocol lines.
///
/// Ordering contract: `write_line` is called once per emitted line, in emission order. Lines are
/// passed without their terminating line break.
pub trait LineSink {
    /// Append one line to the stream.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    /// Push buffered lines to the consumer.
    fn flush(&mut self) -> io::Result<()>;
}

/// Sink writing newline-terminated lines into any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer without flushing it.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl WriterSink<BufWriter<Stdout>> {
    /// Buffered standard output.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl WriterSink<BufWriter<File>> {
    /// Buffered file sink, truncating any existing file at `path`.
    pub fn create(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::create(path)
            .with_context(|| format!("create scene file '{}'", path.display()))?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink for tests and debugging.
///
/// Clones share the same buffer, so a handle kept by the caller observes every line written
/// through the clone owned by a [`Scene`](crate::Scene).
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
    flushes: Rc<Cell<usize>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Captured stream as text, one `\n`-terminated line per entry.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in self.lines.borrow().iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Number of lines captured since creation or the last [`MemorySink::clear`].
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Return `true` when no line was captured.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Number of flushes requested so far.
    pub fn flush_count(&self) -> usize {
        self.flushes.get()
    }

    /// Forget the captured lines.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.set(self.flushes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
