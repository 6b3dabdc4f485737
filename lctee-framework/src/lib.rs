//! # lctee-framework
//!
//! Building blocks for piping a device log stream through a line parser and
//! a printer, line by line.
//!
//! ## Core Concepts
//!
//! - **[`LogProvider`]**: yields raw lines (stdin, files, a subprocess's stdout)
//! - **[`LogParser`]**: turns a raw line into a [`LogItem`]
//! - **[`LogPrinter`]**: renders a [`LogItem`] as one line of text
//!
//! Printers are picked by [`OutputFormat`]: human readable columns (`pidcat`),
//! `ltsv` or `json`, each optionally colored by [`Level`].
//!
//! Processing is synchronous: one line is read, parsed, printed and written
//! before the next one is read.
//!
//! ## Quick Start
//!
//! ```rust
//! use lctee_framework::{Level, LogItem, LogParser, ReaderProvider, TeeDesc, start_with_writer};
//! use std::sync::Arc;
//!
//! // every line becomes the message of an "app" item
//! struct WholeLineParser;
//!
//! impl LogParser for WholeLineParser {
//!     fn parse(&self, raw_line: &str) -> Option<LogItem> {
//!         Some(LogItem::new("", "", "", Level::Info, "app", raw_line))
//!     }
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let provider = ReaderProvider::new("memory", "hello\nworld\n".as_bytes());
//! let mut desc = TeeDesc::new(Arc::new(WholeLineParser));
//! desc.color = false;
//!
//! let mut out = Vec::new();
//! start_with_writer(provider, &desc, &mut out)?;
//! assert!(String::from_utf8(out)?.starts_with("app"));
//! # Ok(())
//! # }
//! ```

pub mod printer;
pub mod provider;
pub mod theme;

// re-export commonly used types
pub use printer::{DefaultPrinter, JsonPrinter, LogPrinter, LtsvPrinter, OutputFormat};
pub use provider::{Level, LogItem, LogParser, LogProvider, ReaderProvider};

mod app;
mod filter;

// public API for running a stream
pub use app::{TeeDesc, start_with_desc, start_with_writer};
pub use filter::filter;
