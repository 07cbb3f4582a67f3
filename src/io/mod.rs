//! Where the conformance report goes.
//!
//! A [`RingTester`](crate::harness::RingTester) writes its banner, one
//! `name ... PASS` line per law and, on a violation, the operand dump.  By
//! default this text goes to stdout.  Tests usually capture it in a buffer
//! and read it back, or discard it with a sink; long runs can send it to a
//! file or an arbitrary stream.

use std::fs::File;
use std::io::{sink, stdout, Error, ErrorKind, Result, Sink, Stdout, Write};

/// Output destination of a tester.
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    /// report text kept in memory until read with `get_print_buffer`
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    /// report text is dropped, e.g. under `assert_ring_laws`
    Sink(Sink),
}

impl PrintTarget {
    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink(_) => "Sink",
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget::{}", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(out) => out.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(text) => {
                text.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(out) => out.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Buffer(_) | PrintTarget::Sink(_) => Ok(()),
        }
    }
}

/// Redirection of a tester's report.
///
/// Switching targets drops the previous one: a captured buffer is lost
/// unless read first, and a file or stream is closed when its last owner
/// goes away.
pub trait ConfigurablePrintTarget {
    /// Report to stdout.  This is where a new tester writes.
    fn print_to_stdout(&mut self);
    /// Append the report to an open file.
    fn print_to_file(&mut self, file: File);
    /// Report to any writer, e.g. a pipe or a shared log.
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// Capture the report in memory, starting from an empty buffer.
    fn print_to_buffer(&mut self);
    /// Drop the report.
    fn print_to_sink(&mut self);
    /// The captured report text.  An error unless capturing with
    /// [`print_to_buffer`](Self::print_to_buffer).
    fn get_print_buffer(&mut self) -> Result<String>;
    fn print_target(&mut self) -> &dyn Write;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(sink());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(text) => Ok(String::from_utf8_lossy(text).into_owned()),
            other => Err(Error::new(
                ErrorKind::Other,
                format!("report is not being captured (target: {})", other.name()),
            )),
        }
    }

    fn print_target(&mut self) -> &dyn Write {
        self
    }
}
