//! Structured example: JSON log lines in, any output format out.
//!
//! This demonstrates a custom parser plugged into the stdin provider:
//! - Parse JSON logs and map their fields onto a `LogItem`
//! - Reject lines that are not JSON (they are echoed as `error: <line>`)
//! - Pick the printer by format name
//!
//! Run with:
//! ```bash
//! echo '{"timestamp":"10-19 10:30:00.000","level":"W","module":"auth","message":"token expired"}' \
//!     | cargo run --example structured -- ltsv
//! ```

use anyhow::Result;
use lctee_framework::{Level, LogItem, LogParser, OutputFormat, ReaderProvider, TeeDesc, start_with_desc};
use std::env;
use std::sync::Arc;

// parser for structured JSON logs
struct JsonParser;

impl LogParser for JsonParser {
    fn parse(&self, raw_log: &str) -> Option<LogItem> {
        // parse JSON
        let json: serde_json::Value = serde_json::from_str(raw_log).ok()?;

        Some(LogItem::new(
            field(&json, "timestamp"),
            "",
            "",
            Level::from_code(field(&json, "level")),
            field(&json, "module"),
            field(&json, "message"),
        ))
    }
}

// missing or non-string fields become empty
fn field<'a>(json: &'a serde_json::Value, key: &str) -> &'a str {
    json.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn main() -> Result<()> {
    let format = env::args()
        .nth(1)
        .map(|name| OutputFormat::from_name(&name))
        .unwrap_or_default();

    let mut desc = TeeDesc::new(Arc::new(JsonParser));
    desc.format = format;

    let count = start_with_desc(ReaderProvider::stdin(), &desc)?;
    eprintln!("{} lines", count);
    Ok(())
}
