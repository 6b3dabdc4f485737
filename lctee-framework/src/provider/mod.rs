//! Provider and parser traits for log acquisition.
//!
//! - [`LogProvider`]: yields raw lines from any source
//! - [`LogParser`]: turns a raw line into a [`LogItem`]
//! - [`ReaderProvider`]: a provider over any [`BufRead`] (stdin, files, pipes)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    next_line()      ┌─────────────┐
//! │ LogProvider  │ ──────────────────> │   String    │ (raw line)
//! └──────────────┘                     └──────┬──────┘
//!                                             │
//!                                             │ parse()
//!                                             │
//! ┌──────────────┐      format()        ┌─────▼──────┐
//! │  LogPrinter  │ <─────────────────── │  LogItem   │
//! └──────────────┘                      └────────────┘
//! ```

mod log_item;

pub use log_item::{Level, LogItem, LogParser, remove_space};

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, StdinLock},
    path::Path,
};

/// Trait for acquiring raw log lines from any source.
///
/// The driver calls [`start`](LogProvider::start) once, pulls lines with
/// [`next_line`](LogProvider::next_line) until it returns `None`, then calls
/// [`stop`](LogProvider::stop).
///
/// # Blocking Contract
///
/// Unlike a polling source, `next_line()` blocks until a full line is
/// available. End of stream and read errors both end the stream with `None`;
/// read errors are logged, never surfaced.
pub trait LogProvider {
    /// Acquire resources (spawn processes, open handles).
    ///
    /// # Errors
    ///
    /// An error aborts the run before any line is read.
    fn start(&mut self) -> Result<()>;

    /// Release resources. Errors are logged by the driver but do not fail the run.
    fn stop(&mut self) -> Result<()>;

    /// Next raw line without its terminator, or `None` at end of stream.
    fn next_line(&mut self) -> Option<String>;
}

/// provider reading newline-terminated lines from a buffered reader
pub struct ReaderProvider<R> {
    name: String,
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderProvider<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            buf: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ReaderProvider<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new("stdin", io::stdin().lock())
    }
}

impl ReaderProvider<BufReader<File>> {
    /// open a file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> LogProvider for ReaderProvider<R> {
    fn start(&mut self) -> Result<()> {
        log::debug!("ReaderProvider({}): Starting", self.name);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        log::debug!("ReaderProvider({}): Stopping", self.name);
        Ok(())
    }

    fn next_line(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                // device logs are not guaranteed to be valid UTF-8
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => {
                log::debug!("ReaderProvider({}): read error, ending stream: {}", self.name, e);
                None
            }
        }
    }
}
