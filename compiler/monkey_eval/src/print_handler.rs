//! Where `puts` output goes.
//!
//! The REPL and file runner write to stdout. Tests and the REPL session
//! capture into a buffer instead and read it back.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Writes lines to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write `line` and a newline to stdout.
    pub fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout is not an evaluation error.
        let _ = writeln!(out, "{line}");
    }
}

/// Accumulates lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` and a newline to the buffer.
    pub fn write_line(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything captured so far; the buffer is left as is.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured text and leave the buffer empty.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// Output destination, dispatched by enum rather than trait object.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Send one line of `puts` output to the destination.
    pub fn write_line(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.write_line(line),
            Self::Buffer(h) => h.write_line(line),
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) => String::new(),
        }
    }

    /// Drain captured output; empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) => String::new(),
        }
    }
}

/// Handler shared by an interpreter and every frame it spawns.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler that writes straight to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Handler that captures output for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
