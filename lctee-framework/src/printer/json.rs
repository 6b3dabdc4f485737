use super::LogPrinter;
use crate::{provider::LogItem, theme};
use anyhow::Result;

/// one JSON object per line, keys `time,pid,tid,level,tag,message`
pub struct JsonPrinter {
    color: bool,
}

impl JsonPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl LogPrinter for JsonPrinter {
    fn format(&mut self, item: LogItem) -> Result<String> {
        let item = item.compact();
        let message = serde_json::to_string(&item)?;

        if self.color {
            Ok(theme::colorize(&item.level, &message))
        } else {
            Ok(message)
        }
    }
}
